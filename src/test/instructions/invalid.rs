use super::*;

#[test]
fn register_bytes_past_dx_fault() {
    let exit_code = execute_err(program![Opcode::INC, 0x0F, Opcode::HALT]);

    assert_eq!(exit_code, ExitCode::InvalidRegister(0x0F));
}

#[test]
fn the_faulting_byte_is_reported() {
    let exit_code = execute_err(program![Opcode::PRINTI, 0x42, Opcode::HALT]);

    assert_eq!(exit_code, ExitCode::InvalidRegister(0x42));
    assert_eq!(exit_code.to_string(), "invalid register 0x42.");
}

#[test]
fn unknown_opcodes_are_skipped() {
    // 0x00 and 0x27 are outside the opcode range
    let (processor, _) = execute_ok(program![
        0x00,
        0x27,
        Opcode::SETR,
        Register::R0,
        0x00,
        0x01,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 1);
}

#[test]
fn truncated_operands_fault() {
    let exit_code = execute_err(program![Opcode::SETR, Register::R0, 0x00]);

    assert_eq!(exit_code, ExitCode::OutOfBounds);
}
