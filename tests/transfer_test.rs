//! Tests for the register transfer instructions (TAX, TAY, TXA, TYA, TSX, TXS).

use cpu6502::{FlatMemory, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program).unwrap();
    cpu.reset();
    cpu
}

#[test]
fn test_tax() {
    let mut cpu = setup_cpu(&[0xAA]);
    cpu.set_a(0x80);

    assert_eq!(cpu.step(), 0xAA);

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_tay_zero() {
    let mut cpu = setup_cpu(&[0xA8]);
    cpu.set_y(0x55);

    cpu.step();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa() {
    let mut cpu = setup_cpu(&[0x8A]);
    cpu.set_x(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_tya() {
    let mut cpu = setup_cpu(&[0x98]);
    cpu.set_y(0xC0);

    cpu.step();

    assert_eq!(cpu.a(), 0xC0);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx_sets_flags() {
    let mut cpu = setup_cpu(&[0xBA]);

    cpu.step();

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_leaves_flags() {
    let mut cpu = setup_cpu(&[0x9A]);
    cpu.set_x(0x00);
    cpu.set_status(0x00);

    cpu.step();

    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z());
    assert_eq!(cpu.status(), 0x00);
}

#[test]
fn test_transfer_chain() {
    // LDA #$05, TAX, TAY, LDA #$00, TXA
    let mut cpu = setup_cpu(&[0xA9, 0x05, 0xAA, 0xA8, 0xA9, 0x00, 0x8A]);

    cpu.run_for_instructions(5).unwrap();

    assert_eq!(cpu.a(), 0x05);
    assert_eq!(cpu.x(), 0x05);
    assert_eq!(cpu.y(), 0x05);
    assert_eq!(cpu.pc(), 0x8007);
}
