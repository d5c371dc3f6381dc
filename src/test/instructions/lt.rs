use super::*;

#[test]
fn sets_one_when_less() {
    let (processor, _) = execute_ok(program![
        Opcode::SETR,
        Register::R0,
        0x00,
        0x03,
        Opcode::SETR,
        Register::R1,
        0x00,
        0x05,
        Opcode::LT,
        Register::R0,
        Register::R1,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 1);
}

#[test]
fn sets_zero_when_equal() {
    let (processor, _) = execute_ok(program![
        Opcode::SETR,
        Register::R0,
        0x00,
        0x05,
        Opcode::SETR,
        Register::R1,
        0x00,
        0x05,
        Opcode::LT,
        Register::R0,
        Register::R1,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 0);
}
