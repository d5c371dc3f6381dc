use super::*;

#[test]
fn copies_between_registers() {
    let (processor, _) = execute_ok(program![
        Opcode::SETR,
        Register::R1,
        0x12,
        0x34,
        Opcode::MOV,
        Register::R0,
        Register::R1,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 0x1234);
    assert_eq!(processor.register(Register::R1), 0x1234);
}

#[test]
fn source_register_is_validated() {
    let exit_code = execute_err(program![Opcode::MOV, Register::R0, 0x0F, Opcode::HALT]);

    assert_eq!(exit_code, ExitCode::InvalidRegister(0x0F));
}
