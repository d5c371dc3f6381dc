use super::*;

#[test]
fn pushes_the_quotient() {
    let (processor, _) = execute_ok(program![
        Opcode::PUSH,
        0x00,
        0x2A,
        Opcode::PUSH,
        0x00,
        0x05,
        Opcode::DIVS,
        Opcode::POP,
        Register::R0,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 8);
}

#[test]
fn zero_dividend_is_allowed() {
    let (processor, _) = execute_ok(program![
        Opcode::PUSH,
        0x00,
        0x00,
        Opcode::PUSH,
        0x00,
        0x05,
        Opcode::DIVS,
        Opcode::POP,
        Register::R0,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 0);
}

#[test]
fn faults_on_a_zero_divisor() {
    let exit_code = execute_err(program![
        Opcode::PUSH,
        0x00,
        0x2A,
        Opcode::PUSH,
        0x00,
        0x00,
        Opcode::DIVS,
        Opcode::HALT
    ]);

    assert_eq!(exit_code, ExitCode::DivisionByZero);
}
