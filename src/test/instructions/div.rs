use super::*;

#[test]
fn divides_into_destination() {
    let (processor, _) = execute_ok(program![
        Opcode::SETR,
        Register::R0,
        0x00,
        0x2A,
        Opcode::SETR,
        Register::R1,
        0x00,
        0x05,
        Opcode::DIV,
        Register::R0,
        Register::R1,
        Opcode::HALT
    ]);

    assert_eq!(processor.register(Register::R0), 8);
}

#[test]
fn faults_on_zero_divisor() {
    let exit_code = execute_err(program![
        Opcode::SETR,
        Register::R0,
        0x00,
        0x2A,
        Opcode::DIV,
        Register::R0,
        Register::R1,
        Opcode::HALT
    ]);

    assert_eq!(exit_code, ExitCode::DivisionByZero);
}

#[test]
fn faults_on_zero_dividend() {
    let exit_code = execute_err(program![
        Opcode::SETR,
        Register::R1,
        0x00,
        0x05,
        Opcode::DIV,
        Register::R0,
        Register::R1,
        Opcode::HALT
    ]);

    assert_eq!(exit_code, ExitCode::DivisionByZero);
}
