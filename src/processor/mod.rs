mod core;

use std::fmt;
use std::io;

use self::core::{Core, TickResult};
use crate::instructions::Register;
use crate::stack::Stack;
use crate::Word;

/// Reason the interpreter loop stopped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExitCode {
    Halted,              // halt instruction was executed (normal shutdown)
    InvalidRegister(u8), // operand byte does not name a register
    DivisionByZero,      // div/mod/divs with a zero operand
    NegativeResult,      // dec/sub would drop below zero
    StackOverflow,       // push onto a full operand stack
    StackUnderflow,      // pop or peek on an empty operand stack
    OutOfBounds,         // instruction pointer ran past the end of the image
}

impl ExitCode {
    pub fn is_success(self) -> bool {
        self == ExitCode::Halted
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExitCode::Halted => f.write_str("halted."),
            ExitCode::InvalidRegister(byte) => write!(f, "invalid register 0x{:02x}.", byte),
            ExitCode::DivisionByZero => {
                f.write_str("attempted division by zero of register.")
            }
            ExitCode::NegativeResult => {
                f.write_str("attempted negative decrementation of register.")
            }
            ExitCode::StackOverflow => f.write_str("operand stack overflow."),
            ExitCode::StackUnderflow => f.write_str("operand stack underflow."),
            ExitCode::OutOfBounds => {
                f.write_str("instruction pointer ran out of the image.")
            }
        }
    }
}

/// The virtual machine. Owns the register file and the operand stack for
/// the duration of one [`run`](Processor::run); print instructions write to
/// the supplied output.
pub struct Processor {
    core: Core,
}

impl Processor {
    pub fn new() -> Processor {
        Processor { core: Core::new() }
    }

    pub fn register(&self, id: Register) -> Word {
        self.core.register(id)
    }

    pub fn stack(&self) -> &Stack {
        self.core.stack()
    }

    /// Disassembles every instruction to stderr before executing it.
    pub fn set_trace(&mut self, enabled: bool) {
        self.core.set_trace(enabled);
    }

    /// Executes `source` from offset zero until the machine stops. Registers
    /// and the stack are reset first, so a `Processor` can be reused.
    pub fn run<W: io::Write>(&mut self, source: &[u8], output: &mut W) -> io::Result<ExitCode> {
        self.core.reset(source);

        loop {
            match self.core.tick(output)? {
                TickResult::Next => {}
                TickResult::Stop(exit_code) => return Ok(exit_code),
            }
        }
    }
}

impl Default for Processor {
    fn default() -> Processor {
        Processor::new()
    }
}
