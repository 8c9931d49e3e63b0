//! Tests for the shift and rotate instructions (ASL, LSR, ROL, ROR).

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program).unwrap();
    cpu.reset();
    cpu
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.set_a(0x81);

    cpu.step();

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_asl_ignores_carry_in() {
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.set_a(0x40);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_asl_zero_page() {
    let mut cpu = setup_cpu(&[0x06, 0x10]);
    cpu.memory_mut().write(0x0010, 0x80);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup_cpu(&[0x4A]);
    cpu.set_a(0x03);

    cpu.step();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_absolute_clears_negative() {
    let mut cpu = setup_cpu(&[0x4E, 0x00, 0x20]);
    cpu.memory_mut().write(0x2000, 0xFE);
    cpu.set_flag_n(true);

    cpu.step();

    assert_eq!(cpu.memory().read(0x2000), 0x7F);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_rol_accumulator_with_carry() {
    let mut cpu = setup_cpu(&[0x2A]);
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
}

#[test]
fn test_rol_zero_page_x() {
    let mut cpu = setup_cpu(&[0x36, 0x10]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x0011, 0x40);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0011), 0x80);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_accumulator_with_carry() {
    let mut cpu = setup_cpu(&[0x6A]);
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_memory_to_zero() {
    let mut cpu = setup_cpu(&[0x66, 0x20]);
    cpu.memory_mut().write(0x0020, 0x01);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0020), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_nine_rotates_restore_value() {
    // ROL A nine times cycles the value through carry and back
    let mut cpu = setup_cpu(&[0x2A; 9]);
    cpu.set_a(0xA5);
    cpu.set_flag_c(false);

    cpu.run_for_instructions(9).unwrap();

    assert_eq!(cpu.a(), 0xA5);
    assert!(!cpu.flag_c());
}
