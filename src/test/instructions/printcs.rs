use super::*;

#[test]
fn streams_bytes_until_the_terminator() {
    let (_, output) = execute_ok(program![
        Opcode::PRINTCS,
        b'H',
        b'i',
        b'!',
        0x00,
        Opcode::HALT
    ]);

    assert_eq!(output, b"Hi!");
}

#[test]
fn execution_continues_past_the_terminator() {
    let (processor, output) = execute_ok(program![
        Opcode::PRINTCS,
        b'!',
        0x00,
        Opcode::SETR,
        Register::R0,
        0x00,
        0x01,
        Opcode::HALT
    ]);

    assert_eq!(output, b"!");
    assert_eq!(processor.register(Register::R0), 1);
}

#[test]
fn missing_terminator_runs_out_of_the_image() {
    let exit_code = execute_err(program![Opcode::PRINTCS, b'x', b'y']);

    assert_eq!(exit_code, ExitCode::OutOfBounds);
}
