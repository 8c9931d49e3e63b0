//! Tests for the increment and decrement instructions (INC, DEC, INX, INY, DEX, DEY).

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program).unwrap();
    cpu.reset();
    cpu
}

#[test]
fn test_inc_zero_page() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]);
    cpu.memory_mut().write(0x0010, 0x41);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0x42);
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_inc_wraps_to_zero() {
    let mut cpu = setup_cpu(&[0xEE, 0x00, 0x20]);
    cpu.memory_mut().write(0x2000, 0xFF);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.memory().read(0x2000), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_c());
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_dec_to_negative() {
    let mut cpu = setup_cpu(&[0xC6, 0x10]);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_dec_absolute_x() {
    let mut cpu = setup_cpu(&[0xDE, 0x00, 0x20]);
    cpu.set_x(0x04);
    cpu.memory_mut().write(0x2004, 0x01);

    cpu.step();

    assert_eq!(cpu.memory().read(0x2004), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_inx_wraps() {
    let mut cpu = setup_cpu(&[0xE8]);
    cpu.set_x(0xFF);

    cpu.step();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_iny() {
    let mut cpu = setup_cpu(&[0xC8]);
    cpu.set_y(0x7F);

    cpu.step();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_dex_wraps() {
    let mut cpu = setup_cpu(&[0xCA]);

    cpu.step();

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_dey_to_zero() {
    let mut cpu = setup_cpu(&[0x88]);
    cpu.set_y(0x01);

    cpu.step();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}
