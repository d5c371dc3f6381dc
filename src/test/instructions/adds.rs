use super::*;

#[test]
fn pushes_the_sum() {
    let (processor, _) = execute_ok(program![
        Opcode::PUSH,
        0x00,
        0x02,
        Opcode::PUSH,
        0x00,
        0x03,
        Opcode::ADDS,
        Opcode::POP,
        Register::R0,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 5);
}

#[test]
fn faults_with_a_single_operand() {
    let exit_code = execute_err(program![Opcode::PUSH, 0x00, 0x01, Opcode::ADDS, Opcode::HALT]);

    assert_eq!(exit_code, ExitCode::StackUnderflow);
}
