use std::collections::HashMap;

use crate::error::{AssembleError, Result};

/// Maps a label name to the absolute image offset it was defined at.
/// Offsets already account for the 3-byte entry header.
pub type LabelMap = HashMap<String, u16>;

pub fn resolve(labels: &LabelMap, name: &str) -> Result<u16> {
    labels
        .get(name)
        .copied()
        .ok_or_else(|| AssembleError::UndefinedLabel(name.to_owned()))
}
