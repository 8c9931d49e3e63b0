//! Property-based tests for addressing mode resolution.
//!
//! These tests verify that every addressing mode reaches the right effective
//! address, including zero-page wraparound, 16-bit wraparound and the
//! indirect-pointer page quirk.

use cpu6502::{FlatMemory, MemoryBus, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

/// True when `addr` overlaps the three instruction bytes at 0x8000
fn in_program(addr: u16) -> bool {
    (0x8000..=0x8002).contains(&addr)
}

// ========== Zero Page Addressing Tests ==========

proptest! {
    /// Property: Zero page addressing reads from address 0x00XX
    #[test]
    fn prop_zero_page_address_calculation(zp_addr in 0u8..=255u8, value in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(zp_addr as u16, value);

        // LDA $zp_addr
        cpu.memory_mut().write(0x8000, 0xA5);
        cpu.memory_mut().write(0x8001, zp_addr);

        cpu.step();

        prop_assert_eq!(cpu.a(), value, "LDA ${:02X}", zp_addr);
    }

    /// Property: Zero page,X addressing wraps within zero page
    #[test]
    fn prop_zero_page_x_wraps_in_zero_page(
        base in 0u8..=255u8,
        x in 0u8..=255u8,
        value in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        let effective_addr = base.wrapping_add(x) as u16;
        cpu.memory_mut().write(effective_addr, value);

        // LDA $base,X
        cpu.memory_mut().write(0x8000, 0xB5);
        cpu.memory_mut().write(0x8001, base);

        cpu.step();

        prop_assert_eq!(
            cpu.a(),
            value,
            "LDA ${:02X},X with X={:02X} should read from ${:04X}",
            base,
            x,
            effective_addr
        );
    }

    /// Property: Zero page,Y addressing wraps within zero page (STX)
    #[test]
    fn prop_zero_page_y_wraps_in_zero_page(
        base in 0u8..=255u8,
        y in 0u8..=255u8,
        value in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        cpu.set_x(value);
        cpu.set_y(y);

        // STX $base,Y
        cpu.memory_mut().write(0x8000, 0x96);
        cpu.memory_mut().write(0x8001, base);

        cpu.step();

        let effective_addr = base.wrapping_add(y) as u16;
        prop_assert_eq!(cpu.memory().read(effective_addr), value);
    }
}

// ========== Absolute Addressing Tests ==========

proptest! {
    /// Property: Absolute addressing reads the little-endian address operand
    #[test]
    fn prop_absolute_address(addr in 0u16..=0xFFFFu16, value in 0u8..=255u8) {
        prop_assume!(!in_program(addr));

        let mut cpu = setup_cpu();
        cpu.memory_mut().write(addr, value);

        // LDA $addr
        cpu.memory_mut().write(0x8000, 0xAD);
        cpu.memory_mut().write(0x8001, addr as u8);
        cpu.memory_mut().write(0x8002, (addr >> 8) as u8);

        cpu.step();

        prop_assert_eq!(cpu.a(), value, "LDA ${:04X}", addr);
        prop_assert_eq!(cpu.pc(), 0x8003);
    }

    /// Property: Absolute,X and Absolute,Y wrap around the 16-bit address space
    #[test]
    fn prop_absolute_indexed_wraps(
        base in 0u16..=0xFFFFu16,
        index in 0u8..=255u8,
        use_y in any::<bool>(),
        value in 0u8..=255u8,
    ) {
        let effective_addr = base.wrapping_add(index as u16);
        prop_assume!(!in_program(effective_addr));

        let mut cpu = setup_cpu();
        cpu.memory_mut().write(effective_addr, value);

        // LDA $base,X or LDA $base,Y
        if use_y {
            cpu.set_y(index);
            cpu.memory_mut().write(0x8000, 0xB9);
        } else {
            cpu.set_x(index);
            cpu.memory_mut().write(0x8000, 0xBD);
        }
        cpu.memory_mut().write(0x8001, base as u8);
        cpu.memory_mut().write(0x8002, (base >> 8) as u8);

        cpu.step();

        prop_assert_eq!(cpu.a(), value, "effective address ${:04X}", effective_addr);
    }
}

// ========== Indirect Addressing Tests ==========

proptest! {
    /// Property: (zp,X) reads its pointer from page zero, wrapping at $FF
    #[test]
    fn prop_indexed_indirect_x(
        zp in 0u8..=255u8,
        x in 0u8..=255u8,
        target in 0x0200u16..=0x7FFFu16,
        value in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);

        let ptr = zp.wrapping_add(x);
        cpu.memory_mut().write(ptr as u16, target as u8);
        cpu.memory_mut().write(ptr.wrapping_add(1) as u16, (target >> 8) as u8);
        cpu.memory_mut().write(target, value);

        // LDA ($zp,X)
        cpu.memory_mut().write(0x8000, 0xA1);
        cpu.memory_mut().write(0x8001, zp);

        cpu.step();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.pc(), 0x8002);
    }

    /// Property: (zp),Y adds Y to the pointer read from page zero
    #[test]
    fn prop_indirect_indexed_y(
        zp in 0u8..=255u8,
        base in 0x0200u16..=0x7EFFu16,
        y in 0u8..=255u8,
        value in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);

        cpu.memory_mut().write(zp as u16, base as u8);
        cpu.memory_mut().write(zp.wrapping_add(1) as u16, (base >> 8) as u8);
        cpu.memory_mut().write(base + y as u16, value);

        // LDA ($zp),Y
        cpu.memory_mut().write(0x8000, 0xB1);
        cpu.memory_mut().write(0x8001, zp);

        cpu.step();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: JMP ($ptr) follows the pointer, taking the high byte from the same page
    #[test]
    fn prop_jmp_indirect_stays_in_pointer_page(
        ptr in 0x0200u16..=0x7FFFu16,
        target in 0u16..=0xFFFFu16,
    ) {
        let mut cpu = setup_cpu();
        let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
        cpu.memory_mut().write(ptr, target as u8);
        cpu.memory_mut().write(hi_addr, (target >> 8) as u8);

        // JMP ($ptr)
        cpu.memory_mut().write(0x8000, 0x6C);
        cpu.memory_mut().write(0x8001, ptr as u8);
        cpu.memory_mut().write(0x8002, (ptr >> 8) as u8);

        cpu.step();

        prop_assert_eq!(cpu.pc(), target);
    }
}

// ========== Relative Addressing Tests ==========

proptest! {
    /// Property: A taken branch lands at PC + 2 + signed offset
    #[test]
    fn prop_relative_offset_is_signed(
        offset in any::<i8>(),
        start in 0x0200u16..=0xF000u16,
    ) {
        let mut cpu = setup_cpu();
        cpu.set_pc(start);
        cpu.set_flag_c(true);

        // BCS offset
        cpu.memory_mut().write(start, 0xB0);
        cpu.memory_mut().write(start + 1, offset as u8);

        cpu.step();

        let expected = (start as i32 + 2 + offset as i32) as u16;
        prop_assert_eq!(cpu.pc(), expected);
    }
}
