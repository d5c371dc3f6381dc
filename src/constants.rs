use crate::Word;
use std::mem;

pub const WORD_BYTES: usize = mem::size_of::<Word>();

/// Number of general-purpose registers (`r0`..`r10`, `ax`, `bx`, `cx`, `dx`).
pub const REGISTER_COUNT: usize = 15;

/// Capacity of the operand stack in words.
pub const STACK_SIZE: usize = 256;
