//! Offset-annotated pretty-printer for images, used for debug tracing.

use byteorder::ByteOrder;
use num_traits::FromPrimitive;
use util::Endian;

use crate::constants;
use crate::instructions::{Opcode, Register};

/// Decodes the instruction at `offset` into assembler syntax. Returns the
/// instruction text and the offset of the next instruction. Truncated
/// operands render as `??` placeholders instead of failing.
pub fn disassemble_instruction(source: &[u8], offset: usize) -> (String, usize) {
    use crate::instructions::Opcode::*;

    let opcode = match source.get(offset).copied() {
        Some(byte) => match Opcode::from_u8(byte) {
            Some(opcode) => opcode,
            None => return (format!("unknown operation {:02x}", byte), offset + 1),
        },
        None => return ("??".to_owned(), offset + 1),
    };

    let (text, size) = match opcode {
        HALT | RET | PRINTIS | ADDS | SUBS | MULS | DIVS | LTS | GTS => (opcode.to_string(), 1),

        PRINTC | PRINTI | PRINTH | INC | DEC | POP | PUSHR | GETIP | PEEK => {
            (format!("{} {}", opcode, register(source, offset + 1)), 2)
        }

        MOV | ADD | SUB | MUL | DIV | SHL | SHR | XOR | OR | AND | MOD | LT | GT => (
            format!(
                "{} {}, {}",
                opcode,
                register(source, offset + 1),
                register(source, offset + 2)
            ),
            3,
        ),

        SETR | JNZ | JZ => (
            format!(
                "{} {}, {}",
                opcode,
                register(source, offset + 1),
                immediate(source, offset + 2)
            ),
            4,
        ),

        JMP | PUSH | CALL => (format!("{} {}", opcode, immediate(source, offset + 1)), 3),

        PRINTCS => string(source, offset),
    };

    (text, offset + size)
}

/// Renders the whole image as an offset-annotated listing.
pub fn disassemble_source(source: &[u8], name: &str) -> String {
    let mut listing = format!("== {} ==\n", name);
    let mut offset = 0;

    while offset < source.len() {
        let (text, next) = disassemble_instruction(source, offset);
        listing.push_str(&format!("{:04x}   {}\n", offset, text));
        offset = next;
    }

    listing
}

fn register(source: &[u8], index: usize) -> String {
    source
        .get(index)
        .copied()
        .and_then(Register::from_u8)
        .map(|register| register.to_string())
        .unwrap_or_else(|| "??".to_owned())
}

fn immediate(source: &[u8], index: usize) -> String {
    if index + constants::WORD_BYTES <= source.len() {
        format!(
            "0x{:04x}",
            Endian::read_u16(&source[index..index + constants::WORD_BYTES])
        )
    } else {
        "0x????".to_owned()
    }
}

fn string(source: &[u8], offset: usize) -> (String, usize) {
    let mut text = String::from("printcs \"");
    let mut index = offset + 1;

    loop {
        match source.get(index).copied() {
            Some(0x00) => {
                index += 1;
                break;
            }
            Some(0x0A) => text.push_str("\\n"),
            Some(byte) => text.push(byte as char),
            None => break,
        }
        index += 1;
    }

    text.push('"');
    (text, index - offset)
}
