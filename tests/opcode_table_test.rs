//! Tests for the opcode table and its lookup helpers.

use cpu6502::{lookup, AddressingMode, Instruction, OPCODE_TABLE};

#[test]
fn test_table_is_indexed_by_opcode() {
    for (i, entry) in OPCODE_TABLE.iter().enumerate() {
        assert_eq!(entry.opcode as usize, i);
        assert_eq!(lookup(i as u8), entry);
    }
}

#[test]
fn test_documented_opcode_count() {
    let documented = OPCODE_TABLE
        .iter()
        .filter(|e| e.instruction != Instruction::Illegal)
        .count();

    assert_eq!(documented, 151);
}

#[test]
fn test_illegal_entries_are_consistent() {
    for entry in OPCODE_TABLE.iter() {
        let illegal_mode = entry.addressing_mode == AddressingMode::Illegal;
        let illegal_instr = entry.instruction == Instruction::Illegal;

        assert_eq!(illegal_mode, illegal_instr, "opcode 0x{:02X}", entry.opcode);
        if illegal_instr {
            assert_eq!(entry.mnemonic, "ILLG");
            assert!(!entry.is_executable());
            assert!(!entry.manages_pc);
        }
    }
}

#[test]
fn test_mnemonic_matches_instruction() {
    for entry in OPCODE_TABLE.iter() {
        assert_eq!(entry.mnemonic, entry.instruction.mnemonic());
        if entry.instruction != Instruction::Illegal {
            assert_eq!(entry.mnemonic.len(), 3);
        }
    }
}

#[test]
fn test_pc_managing_entries() {
    let managing: Vec<u8> = OPCODE_TABLE
        .iter()
        .filter(|e| e.manages_pc)
        .map(|e| e.opcode)
        .collect();

    // BPL JSR BMI JMP JMP() BVC BVS BCC BCS BNE BEQ RTS
    let mut expected = vec![
        0x10, 0x20, 0x30, 0x4C, 0x6C, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0, 0x60,
    ];
    expected.sort_unstable();

    assert_eq!(managing, expected);
}

#[test]
fn test_brk_rejected_rti_accepted() {
    let brk = lookup(0x00);
    assert_eq!(brk.mnemonic, "BRK");
    assert_eq!(brk.addressing_mode, AddressingMode::Implied);
    assert!(!brk.is_executable());

    let rti = lookup(0x40);
    assert_eq!(rti.mnemonic, "RTI");
    assert_eq!(rti.addressing_mode, AddressingMode::Implied);
    assert!(rti.is_executable());
    assert!(!rti.manages_pc);
}

#[test]
fn test_selected_entries() {
    let cases = [
        (0xA9, "LDA", AddressingMode::Immediate, 2),
        (0xB5, "LDA", AddressingMode::ZeroPageX, 2),
        (0xB6, "LDX", AddressingMode::ZeroPageY, 2),
        (0xBD, "LDA", AddressingMode::AbsoluteX, 3),
        (0x99, "STA", AddressingMode::AbsoluteY, 3),
        (0x81, "STA", AddressingMode::IndexedIndirectX, 2),
        (0xB1, "LDA", AddressingMode::IndirectIndexedY, 2),
        (0x0A, "ASL", AddressingMode::Accumulator, 1),
        (0x6C, "JMP", AddressingMode::Indirect, 3),
        (0xD0, "BNE", AddressingMode::Relative, 2),
        (0xEA, "NOP", AddressingMode::Implied, 1),
        (0xE0, "CPX", AddressingMode::Immediate, 2),
    ];

    for (opcode, mnemonic, mode, size) in cases {
        let entry = lookup(opcode);
        assert_eq!(entry.mnemonic, mnemonic, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.addressing_mode, mode, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.size_bytes(), size, "opcode 0x{:02X}", opcode);
    }
}

#[test]
fn test_mode_sizes() {
    assert_eq!(AddressingMode::Implied.size_bytes(), 1);
    assert_eq!(AddressingMode::Accumulator.size_bytes(), 1);
    assert_eq!(AddressingMode::Immediate.size_bytes(), 2);
    assert_eq!(AddressingMode::Relative.size_bytes(), 2);
    assert_eq!(AddressingMode::Absolute.size_bytes(), 3);
    assert_eq!(AddressingMode::Indirect.size_bytes(), 3);
}
