use super::*;

#[test]
fn stores_the_ip_past_the_instruction() {
    let (processor, _) = execute_ok(program![Opcode::GETIP, Register::R0, Opcode::HALT]);

    assert_eq!(processor.register(Register::R0), 2);
}

#[test]
fn keeps_the_full_sixteen_bits() {
    // pad with 256 unknown single-byte operations so the ip crosses 0xff
    let mut code = vec![0x00; 256];
    code.extend_from_slice(program![Opcode::GETIP, Register::R0, Opcode::HALT]);

    let (processor, _, exit_code) = execute(&code);

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(processor.register(Register::R0), 258);
}
