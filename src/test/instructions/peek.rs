use super::*;

#[test]
fn reads_without_popping() {
    let (processor, _) = execute_ok(program![
        Opcode::PUSH,
        0x00,
        0x07,
        Opcode::PEEK,
        Register::R0,
        Opcode::POP,
        Register::R1,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 7);
    assert_eq!(processor.register(Register::R1), 7);
    assert!(processor.stack().is_empty());
}

#[test]
fn faults_on_an_empty_stack() {
    let exit_code = execute_err(program![Opcode::PEEK, Register::R0, Opcode::HALT]);

    assert_eq!(exit_code, ExitCode::StackUnderflow);
}
