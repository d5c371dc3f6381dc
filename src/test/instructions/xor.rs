use super::*;

#[test]
fn combines_into_destination() {
    let (processor, _) = execute_ok(program![
        Opcode::SETR,
        Register::R0,
        0x0F,
        0xF0,
        Opcode::SETR,
        Register::R1,
        0x00,
        0xFF,
        Opcode::XOR,
        Register::R0,
        Register::R1,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 0x0F0F);
}

#[test]
fn clears_a_register_against_itself() {
    let (processor, _) = execute_ok(program![
        Opcode::SETR,
        Register::R0,
        0x12,
        0x34,
        Opcode::XOR,
        Register::R0,
        Register::R0,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 0);
}
