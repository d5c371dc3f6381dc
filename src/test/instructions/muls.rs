use super::*;

#[test]
fn pushes_the_product() {
    let (processor, _) = execute_ok(program![
        Opcode::PUSH,
        0x00,
        0x06,
        Opcode::PUSH,
        0x00,
        0x07,
        Opcode::MULS,
        Opcode::POP,
        Register::R0,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 42);
}
