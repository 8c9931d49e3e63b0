//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP, and SP wraps from 0x00
//! to 0xFF (and back) without ever leaving page one.

use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Stack operation:
/// 1. Write accumulator value to 0x0100 | SP
/// 2. Decrement SP (wraps from 0x00 to 0xFF)
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.memory_mut().write(0x8000, 0x48); // PHA
/// cpu.set_a(0x42);
///
/// cpu.step();
///
/// assert_eq!(cpu.memory().read(0x01FF), 0x42);
/// assert_eq!(cpu.sp(), 0xFE);
/// assert_eq!(cpu.pc(), 0x8001);
/// ```
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.push(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes the packed status byte exactly as held, every bit included.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.flags.to_byte();
    cpu.push(status);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Increments SP, loads the byte at 0x0100 | SP into A and updates Z and N.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pull();
    cpu.flags.set_zero_negative(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// All eight flags are replaced by the pulled byte.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull();
    cpu.flags = StatusFlags::from_byte(status);
}
