use pest_derive::Parser;

/// Parser for the assembly language, generated from `asm.pest`.
#[derive(Parser)]
#[grammar = "asm.pest"]
pub struct AsmParser;
