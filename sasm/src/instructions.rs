use byteorder::ByteOrder;
use matches::debug_assert_matches;
use pest::iterators::Pair;

use scpu::{Opcode, Register};
use util::Endian;

use crate::error::{new_parser_error, Result};
use crate::int_util::process_u16;
use crate::labels::{self, LabelMap};
use crate::parser::Rule;

/// A jump or call destination: either an absolute image offset or a label
/// reference that is resolved when the image is emitted.
#[derive(Debug, PartialEq)]
pub enum JumpTarget {
    Address(u16),
    Label(String),
}

/// One processed statement. Label references stay symbolic until emission
/// so that forward references assemble.
#[derive(Debug, PartialEq)]
pub enum ParsedInstruction {
    Complete(Vec<u8>),

    Jump {
        opcode: Opcode,
        target: JumpTarget,
    },

    Branch {
        opcode: Opcode,
        register: Register,
        target: JumpTarget,
    },
}

impl ParsedInstruction {
    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        match self {
            ParsedInstruction::Complete(bytes) => bytes.len(),
            ParsedInstruction::Jump { .. } => 3,
            ParsedInstruction::Branch { .. } => 4,
        }
    }
}

fn process_opcode(pair: &Pair<Rule>) -> Result<Opcode> {
    pair.as_str()
        .to_uppercase()
        .parse()
        .map_err(|err: util::ParseEnumError| new_parser_error(pair.as_span(), err.to_string()))
}

fn process_register(pair: &Pair<Rule>) -> Result<Register> {
    pair.as_str().to_uppercase().parse().map_err(|_| {
        new_parser_error(
            pair.as_span(),
            format!("invalid register `{}`.", pair.as_str()),
        )
    })
}

fn process_target(pair: Pair<Rule>) -> Result<JumpTarget> {
    debug_assert_matches!(pair.as_rule(), Rule::target);

    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::int => Ok(JumpTarget::Address(process_u16(inner)?)),
        Rule::name => Ok(JumpTarget::Label(inner.as_str().to_owned())),
        _ => unreachable!(),
    }
}

/// Encodes one `instruction` pair. Everything except jump/branch targets is
/// fully encoded on the spot.
pub fn process_instruction(pair: Pair<Rule>) -> Result<ParsedInstruction> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);

    let inner = pair.into_inner().next().unwrap();
    let rule = inner.as_rule();
    let mut pairs = inner.into_inner();

    match rule {
        Rule::i_none => {
            let opcode = process_opcode(&pairs.next().unwrap())?;
            Ok(ParsedInstruction::Complete(vec![opcode as u8]))
        }

        Rule::i_reg => {
            let opcode = process_opcode(&pairs.next().unwrap())?;
            let register = process_register(&pairs.next().unwrap())?;
            Ok(ParsedInstruction::Complete(vec![
                opcode as u8,
                register as u8,
            ]))
        }

        Rule::i_regreg => {
            let opcode = process_opcode(&pairs.next().unwrap())?;
            let dest = process_register(&pairs.next().unwrap())?;
            let src = process_register(&pairs.next().unwrap())?;
            Ok(ParsedInstruction::Complete(vec![
                opcode as u8,
                dest as u8,
                src as u8,
            ]))
        }

        Rule::i_setr => {
            let register = process_register(&pairs.next().unwrap())?;
            let value = process_u16(pairs.next().unwrap())?;
            let mut bytes = vec![Opcode::SETR as u8, register as u8, 0, 0];
            Endian::write_u16(&mut bytes[2..], value);
            Ok(ParsedInstruction::Complete(bytes))
        }

        Rule::i_push => {
            let value = process_u16(pairs.next().unwrap())?;
            let mut bytes = vec![Opcode::PUSH as u8, 0, 0];
            Endian::write_u16(&mut bytes[1..], value);
            Ok(ParsedInstruction::Complete(bytes))
        }

        Rule::i_branch => {
            let opcode = process_opcode(&pairs.next().unwrap())?;
            let register = process_register(&pairs.next().unwrap())?;
            let target = process_target(pairs.next().unwrap())?;
            Ok(ParsedInstruction::Branch {
                opcode,
                register,
                target,
            })
        }

        Rule::i_jump => {
            let opcode = process_opcode(&pairs.next().unwrap())?;
            let target = process_target(pairs.next().unwrap())?;
            Ok(ParsedInstruction::Jump { opcode, target })
        }

        Rule::i_string => {
            let literal = pairs.next().unwrap();
            match literal.as_rule() {
                Rule::string => {
                    let inner = literal.into_inner().next().unwrap();
                    let mut bytes = vec![Opcode::PRINTCS as u8];
                    for byte in inner.as_str().bytes() {
                        // NUL is the wire terminator, so it cannot appear in
                        // the emitted string; a space stands in for it
                        bytes.push(if byte == 0x00 { 0x20 } else { byte });
                    }
                    bytes.push(0x00);
                    Ok(ParsedInstruction::Complete(bytes))
                }
                Rule::unterminated_string => Err(new_parser_error(
                    literal.as_span(),
                    "unterminated string.".to_owned(),
                )),
                _ => unreachable!(),
            }
        }

        _ => unreachable!(),
    }
}

fn resolve_target(labels: &LabelMap, target: &JumpTarget) -> Result<u16> {
    match target {
        JumpTarget::Address(address) => Ok(*address),
        JumpTarget::Label(name) => labels::resolve(labels, name),
    }
}

/// Emits the final code section, resolving every symbolic target against
/// the label map.
pub fn emit_instructions(
    instructions: &[ParsedInstruction],
    labels: &LabelMap,
) -> Result<Vec<u8>> {
    let size = instructions.iter().map(ParsedInstruction::size).sum();
    let mut code = Vec::with_capacity(size);
    let mut address_buffer = [0u8; 2];

    for instruction in instructions {
        match instruction {
            ParsedInstruction::Complete(bytes) => code.extend_from_slice(bytes),

            ParsedInstruction::Jump { opcode, target } => {
                Endian::write_u16(&mut address_buffer, resolve_target(labels, target)?);
                code.push(*opcode as u8);
                code.extend_from_slice(&address_buffer);
            }

            ParsedInstruction::Branch {
                opcode,
                register,
                target,
            } => {
                Endian::write_u16(&mut address_buffer, resolve_target(labels, target)?);
                code.push(*opcode as u8);
                code.push(*register as u8);
                code.extend_from_slice(&address_buffer);
            }
        }
    }

    Ok(code)
}
