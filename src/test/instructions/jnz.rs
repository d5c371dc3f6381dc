use super::*;

#[test]
fn taken_when_register_is_non_zero() {
    // setr r0, 1; jnz r0, 10; inc r1; halt
    let (processor, _) = execute_ok(program![
        Opcode::SETR,
        Register::R0,
        0x00,
        0x01,
        Opcode::JNZ,
        Register::R0,
        0x00,
        0x0A,
        Opcode::INC,
        Register::R1,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R1), 0);
}

#[test]
fn skipped_when_register_is_zero() {
    let (processor, _) = execute_ok(program![
        Opcode::JNZ,
        Register::R0,
        0x00,
        0x06,
        Opcode::INC,
        Register::R1,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R1), 1);
}
