//! Assembler for the [scpu](../scpu/index.html) virtual machine.
//!
//! The entry points are [`assemble`](fn.assemble.html), which assembles a
//! source string, and [`assemble_file`](fn.assemble_file.html), which reads
//! a file and resolves `%include` directives relative to it. Both produce an
//! [`Image`](../simg/struct.Image.html) whose first three bytes jump to the
//! mandatory `main` label.
//!
//! Parsing is implemented with [pest]; syntax errors come with the usual
//! pest span rendering.
//!
//! # Assembly language
//!
//! One statement per line. A `;` starts a comment that runs to the end of
//! the line. A statement is a label definition (`name:`), an instruction,
//! or both on one line. Operands are separated by a comma followed by a
//! single space.
//!
//! Numeric literals use auto base detection: `0x` prefix for hexadecimal, a
//! leading `0` for octal, decimal otherwise.
//!
//! ## Registers
//!
//! Fifteen 16-bit general-purpose registers: `r0`..`r10`, `ax`, `bx`, `cx`
//! and `dx`.
//!
//! ## Mnemonics
//!
//! Mnemonic  | Description                                  | Syntax
//! ----------|----------------------------------------------|----------------------
//! `halt`    | Stop the machine                             | `halt`
//! `mov`     | Copy register                                | `mov dest, src`
//! `setr`    | Load immediate value                         | `setr dest, value`
//! `inc`     | Increment                                    | `inc dest`
//! `dec`     | Decrement (faults at zero)                   | `dec dest`
//! `add`     | Integer addition                             | `add dest, src`
//! `sub`     | Integer subtraction (result must be > 0)     | `sub dest, src`
//! `mul`     | Integer multiplication                       | `mul dest, src`
//! `div`     | Integer division (faults on zero operands)   | `div dest, src`
//! `mod`     | Integer remainder (faults on zero operands)  | `mod dest, src`
//! `shl`     | Shift left                                   | `shl dest, src`
//! `shr`     | Shift right                                  | `shr dest, src`
//! `xor`     | Bitwise exclusive-or                         | `xor dest, src`
//! `or`      | Bitwise or                                   | `or dest, src`
//! `and`     | Bitwise and                                  | `and dest, src`
//! `lt`      | Set if less than                             | `lt dest, src`
//! `gt`      | Set if greater than                          | `gt dest, src`
//! `jmp`     | Jump                                         | `jmp target`
//! `jnz`     | Jump if register is non-zero                 | `jnz src, target`
//! `jz`      | Jump if register is zero                     | `jz src, target`
//! `call`    | Call a procedure                             | `call target`
//! `ret`     | Return from a procedure                      | `ret`
//! `push`    | Push immediate value                         | `push value`
//! `pushr`   | Push register value                          | `pushr src`
//! `pop`     | Pop into register                            | `pop dest`
//! `peek`    | Read top of stack without popping            | `peek dest`
//! `getip`   | Read the instruction pointer                 | `getip dest`
//! `printc`  | Print register as a character                | `printc src`
//! `printcs` | Print an inline string                       | `printcs "text"`
//! `printi`  | Print register as a decimal integer          | `printi src`
//! `printh`  | Print register as 4-digit hexadecimal        | `printh src`
//! `printis` | Pop and print as a decimal integer           | `printis`
//! `adds`    | Stack addition                               | `adds`
//! `subs`    | Stack subtraction                            | `subs`
//! `muls`    | Stack multiplication                         | `muls`
//! `divs`    | Stack division (faults on zero divisor)      | `divs`
//! `lts`     | Stack set if less than                       | `lts`
//! `gts`     | Stack set if greater than                    | `gts`
//!
//! A `jmp`/`jnz`/`jz`/`call` target is a label name or a numeric offset
//! into the image. Labels may be referenced before they are defined.
//!
//! ## Directives
//!
//! `%include <path>` splices another source file into the program at the
//! directive's position. The included file shares the enclosing program's
//! label table. Relative paths resolve against the including file.
//!
//! [pest]: https://docs.rs/pest/

mod error;
mod instructions;
mod int_util;
mod labels;
mod parser;


use std::fs;
use std::path::{Path, PathBuf};

use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::Parser;

use simg::Image;

pub use crate::error::{AssembleError, Result};
use crate::error::new_parser_error;
use crate::instructions::{process_instruction, ParsedInstruction};
use crate::labels::LabelMap;
use crate::parser::{AsmParser, Rule};

/// Label every program must define; the image header jumps to it.
pub const ENTRY_LABEL: &str = "main";

/// Assembles a complete source string into an image. `%include` paths are
/// resolved relative to the current directory.
pub fn assemble(input: &str) -> Result<Image> {
    let mut assembler = Assembler::new();
    assembler.process_source(input, None)?;
    assembler.finish()
}

/// Assembles the given file into an image. `%include` paths are resolved
/// relative to the including file.
pub fn assemble_file<P: AsRef<Path>>(path: P) -> Result<Image> {
    let mut assembler = Assembler::new();
    assembler.process_file(path.as_ref())?;
    assembler.finish()
}

/// Assembler state for one run: the processed instructions, the label table
/// and the running image offset.
struct Assembler {
    instructions: Vec<ParsedInstruction>,
    labels: LabelMap,
    bytes_written: u32,
    include_stack: Vec<PathBuf>,
}

impl Assembler {
    fn new() -> Assembler {
        Assembler {
            instructions: Vec::new(),
            labels: LabelMap::new(),
            // label offsets account for the entry header from the start
            bytes_written: simg::HEADER_BYTES as u32,
            include_stack: Vec::new(),
        }
    }

    fn process_file(&mut self, path: &Path) -> Result<()> {
        let input = fs::read_to_string(path).map_err(|source| AssembleError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.include_stack.push(canonical);
        let result = self.process_source(&input, path.parent());
        self.include_stack.pop();

        result
    }

    fn process_source(&mut self, input: &str, base: Option<&Path>) -> Result<()> {
        let program = AsmParser::parse(Rule::program, input)?.next().unwrap();
        debug_assert_matches!(program.as_rule(), Rule::program);

        for line in program.into_inner() {
            if line.as_rule() == Rule::EOI {
                continue;
            }
            for statement in line.into_inner() {
                self.process_statement(statement, base)?;
            }
        }

        Ok(())
    }

    fn process_statement(&mut self, pair: Pair<Rule>, base: Option<&Path>) -> Result<()> {
        debug_assert_matches!(pair.as_rule(), Rule::statement);

        let inner = pair.into_inner().next().unwrap();
        match inner.as_rule() {
            Rule::include => self.process_include(inner, base),
            Rule::labeled => {
                for part in inner.into_inner() {
                    match part.as_rule() {
                        Rule::label_def => self.define_label(part)?,
                        Rule::instruction => self.push_instruction(process_instruction(part)?)?,
                        _ => unreachable!(),
                    }
                }
                Ok(())
            }
            _ => unreachable!(),
        }
    }

    fn process_include(&mut self, pair: Pair<Rule>, base: Option<&Path>) -> Result<()> {
        let path_pair = pair.into_inner().next().unwrap();
        let span = path_pair.as_span();

        let raw = PathBuf::from(path_pair.as_str());
        let path = match base {
            Some(directory) if raw.is_relative() => directory.join(&raw),
            _ => raw,
        };

        if !path.exists() {
            return Err(new_parser_error(
                span,
                format!(
                    "attempted to include a file `{}` that does not exist.",
                    path_pair.as_str()
                ),
            ));
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.clone());
        if self.include_stack.contains(&canonical) {
            return Err(new_parser_error(
                span,
                format!("include cycle through `{}`.", path_pair.as_str()),
            ));
        }

        self.process_file(&path)
    }

    fn define_label(&mut self, pair: Pair<Rule>) -> Result<()> {
        let name_pair = pair.into_inner().next().unwrap();
        let name = name_pair.as_str();

        if self.labels.contains_key(name) {
            return Err(new_parser_error(
                name_pair.as_span(),
                format!("label `{}` is already defined.", name),
            ));
        }

        self.labels.insert(name.to_owned(), self.bytes_written as u16);
        Ok(())
    }

    fn push_instruction(&mut self, instruction: ParsedInstruction) -> Result<()> {
        self.bytes_written += instruction.size() as u32;
        if self.bytes_written > u32::from(u16::max_value()) {
            return Err(AssembleError::ProgramTooLarge);
        }

        self.instructions.push(instruction);
        Ok(())
    }

    fn finish(self) -> Result<Image> {
        let entry = *self
            .labels
            .get(ENTRY_LABEL)
            .ok_or(AssembleError::MissingMain)?;
        let code = instructions::emit_instructions(&self.instructions, &self.labels)?;

        Ok(Image::from_parts(entry, &code))
    }
}
