//! Tests for loading program images into memory.

use cpu6502::{
    load_program, FlatMemory, LoadError, MemoryBus, CPU, LOAD_ADDRESS, MAX_PROGRAM_SIZE,
};

#[test]
fn test_load_copies_image_to_load_address() {
    let mut cpu = CPU::new(FlatMemory::new());

    let written = cpu.load_program(&[0xA9, 0x05, 0xAA]).unwrap();

    assert_eq!(written, 3);
    assert_eq!(cpu.memory().read(0x8000), 0xA9);
    assert_eq!(cpu.memory().read(0x8001), 0x05);
    assert_eq!(cpu.memory().read(0x8002), 0xAA);
    assert_eq!(cpu.memory().read(0x8003), 0x00);
}

#[test]
fn test_load_sets_reset_vector() {
    let mut memory = FlatMemory::new();

    load_program(&mut memory, &[0xEA]).unwrap();

    assert_eq!(memory.read_word(0xFFFC), LOAD_ADDRESS);
}

#[test]
fn test_load_does_not_touch_registers() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0x1234);
    cpu.set_a(0x42);

    cpu.load_program(&[0xEA, 0xEA]).unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.a(), 0x42);

    cpu.reset();
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_load_empty_image() {
    let mut memory = FlatMemory::new();

    assert_eq!(load_program(&mut memory, &[]), Ok(0));
    assert_eq!(memory.read_word(0xFFFC), 0x8000);
}

#[test]
fn test_load_largest_image() {
    let mut memory = FlatMemory::new();
    let image = vec![0xEA; MAX_PROGRAM_SIZE];

    assert_eq!(load_program(&mut memory, &image), Ok(MAX_PROGRAM_SIZE));

    let last = LOAD_ADDRESS + (MAX_PROGRAM_SIZE as u16 - 1);
    assert_eq!(memory.read(last), 0xEA);
    assert_eq!(memory.read(last + 1), 0x00);
}

#[test]
fn test_load_rejects_oversized_image_without_writing() {
    let mut memory = FlatMemory::new();
    let image = vec![0xEA; MAX_PROGRAM_SIZE + 1];

    assert_eq!(
        load_program(&mut memory, &image),
        Err(LoadError::ProgramTooLarge {
            size: MAX_PROGRAM_SIZE + 1,
            max: MAX_PROGRAM_SIZE,
        })
    );
    assert_eq!(memory.read(LOAD_ADDRESS), 0x00);
    assert_eq!(memory.read_word(0xFFFC), 0x0000);
}

#[test]
fn test_load_error_display() {
    let err = LoadError::ProgramTooLarge { size: 40000, max: 32762 };
    assert_eq!(
        err.to_string(),
        "Program of 40000 bytes exceeds the 32762 byte limit"
    );
}
