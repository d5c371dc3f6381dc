use num_derive::{FromPrimitive, ToPrimitive};
use util::EnumFromStr;
use util_derive::EnumFromStr;

/// Processor instruction set.
///
/// The discriminant of each variant is the wire encoding of the opcode.
/// Operand bytes follow the opcode directly; the layout per family is:
///
/// | Family            | Operand bytes                    |
/// |-------------------|----------------------------------|
/// | plain             | none                             |
/// | register          | `reg`                            |
/// | register/register | `reg`, `reg`                     |
/// | register/value    | `reg`, `hi`, `lo`                |
/// | value             | `hi`, `lo`                       |
/// | string            | bytes terminated by `0x00`       |
///
/// 16-bit values are big-endian, high byte at the lower address.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive, EnumFromStr)]
pub enum Opcode {
    //  Mnemonic      | Operands   | Effect
    //----------------+------------+--------------------------------------------
    HALT = 0x01,   // |            | stops the processor
    MOV = 0x02,    // | dest, src  | dest = src
    PRINTC = 0x03, // | src        | print low byte of src as a character
    PRINTCS = 0x04, // | string   | print inline string terminated by 0x00
    PRINTI = 0x05, // | src        | print src as a decimal integer
    PRINTH = 0x06, // | src        | print src as 4-digit hexadecimal
    SETR = 0x07,   // | dest, imm  | dest = imm
    INC = 0x08,    // | dest       | dest += 1 (wrapping)
    DEC = 0x09,    // | dest       | dest -= 1, faults when dest is zero
    ADD = 0x0A,    // | dest, src  | dest += src (wrapping)
    SUB = 0x0B,    // | dest, src  | dest -= src, faults unless dest > src
    MUL = 0x0C,    // | dest, src  | dest *= src (wrapping)
    DIV = 0x0D,    // | dest, src  | dest /= src, faults when either is zero
    JMP = 0x0E,    // | addr       | ip = addr
    JNZ = 0x0F,    // | src, addr  | ip = addr when src != 0
    JZ = 0x10,     // | src, addr  | ip = addr when src == 0
    SHL = 0x11,    // | dest, src  | dest <<= src
    SHR = 0x12,    // | dest, src  | dest >>= src
    XOR = 0x13,    // | dest, src  | dest ^= src
    OR = 0x14,     // | dest, src  | dest |= src
    AND = 0x15,    // | dest, src  | dest &= src
    POP = 0x16,    // | dest       | dest = pop()
    PUSH = 0x17,   // | imm        | push(imm)
    PUSHR = 0x18,  // | src        | push(src)
    GETIP = 0x19,  // | dest       | dest = ip past this instruction
    PEEK = 0x1A,   // | dest       | dest = top of stack, without popping
    MOD = 0x1B,    // | dest, src  | dest %= src, faults when either is zero
    LT = 0x1C,     // | dest, src  | dest = (dest < src) ? 1 : 0
    GT = 0x1D,     // | dest, src  | dest = (dest > src) ? 1 : 0
    RET = 0x1E,    // |            | ip = pop()
    CALL = 0x1F,   // | addr       | push(ip), ip = addr
    PRINTIS = 0x20, // |          | print pop() as a decimal integer
    ADDS = 0x21,   // |            | b = pop(), a = pop(), push(a + b)
    SUBS = 0x22,   // |            | b = pop(), a = pop(), push(a - b)
    MULS = 0x23,   // |            | b = pop(), a = pop(), push(a * b)
    DIVS = 0x24,   // |            | b = pop(), a = pop(), push(a / b)
    LTS = 0x25,    // |            | b = pop(), a = pop(), push(a < b)
    GTS = 0x26,    // |            | b = pop(), a = pop(), push(a > b)
}

/// General-purpose 16-bit registers. A register operand is encoded as one
/// byte holding the discriminant; any byte past `dx` is invalid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive, EnumFromStr)]
pub enum Register {
    R0 = 0x00,
    R1 = 0x01,
    R2 = 0x02,
    R3 = 0x03,
    R4 = 0x04,
    R5 = 0x05,
    R6 = 0x06,
    R7 = 0x07,
    R8 = 0x08,
    R9 = 0x09,
    R10 = 0x0A,
    AX = 0x0B,
    BX = 0x0C,
    CX = 0x0D,
    DX = 0x0E,
}

impl Register {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

macro_rules! impl_enum_display {
    ($e:ty) => {
        impl std::fmt::Display for $e {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(&format!("{:?}", self).to_lowercase())
            }
        }
    };
}

impl_enum_display!(Opcode);
impl_enum_display!(Register);
