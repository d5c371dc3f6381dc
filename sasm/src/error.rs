use pest::error::{Error as PestError, ErrorVariant};
use pest::Span;
use thiserror::Error;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, AssembleError>;

#[derive(Error, Debug)]
pub enum AssembleError {
    /// Syntax error or any other problem that points at a source span.
    #[error("{0}")]
    Parse(Box<PestError<Rule>>),

    #[error("label `{0}` does not exist.")]
    UndefinedLabel(String),

    #[error("main label does not exist.")]
    MissingMain,

    #[error("program does not fit in a 16-bit image.")]
    ProgramTooLarge,

    #[error("reading `{path}` failed: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl From<PestError<Rule>> for AssembleError {
    fn from(err: PestError<Rule>) -> AssembleError {
        AssembleError::Parse(Box::new(err))
    }
}

/// Builds a span-carrying error with a custom message.
pub fn new_parser_error(span: Span, message: String) -> AssembleError {
    AssembleError::Parse(Box::new(PestError::new_from_span(
        ErrorVariant::CustomError { message },
        span,
    )))
}
