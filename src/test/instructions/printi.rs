use super::*;

#[test]
fn writes_a_decimal_integer() {
    let (_, output) = execute_ok(program![
        Opcode::SETR,
        Register::R0,
        0x00,
        0x2A,
        Opcode::PRINTI,
        Register::R0,
        Opcode::HALT
    ]);

    assert_eq!(output, b"42");
}

#[test]
fn writes_zero_for_a_fresh_register() {
    let (_, output) = execute_ok(program![Opcode::PRINTI, Register::R9, Opcode::HALT]);

    assert_eq!(output, b"0");
}
