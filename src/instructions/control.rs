//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (Absolute or Indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt (no-op, interrupts are not emulated)
//! - NOP: No Operation
//!
//! JMP, JSR and RTS assign PC themselves; the opcode table marks them `manages_pc` so
//! the engine does not add the instruction size afterwards.
//!
//! The return address JSR pushes is the address of the next instruction (PC + 3), and
//! RTS resumes exactly there. BRK is rejected by the engine and never reaches a handler.

use crate::{InstructionContext, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The resolved address is used as-is, wherever in the address space it points.
/// For the Indirect form the resolver has already followed the pointer, including the
/// NMOS page-wrap quirk: JMP ($10FF) reads its target from $10FF and $1000.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    cpu.pc = ctx.address;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// 1. Push the high byte of PC + 3
/// 2. Push the low byte of PC + 3
/// 3. Set PC to the resolved address
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// // JSR $9000
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.load_program(&[0x20, 0x00, 0x90]).unwrap();
/// cpu.reset();
/// cpu.step();
///
/// assert_eq!(cpu.pc(), 0x9000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.memory().read(0x01FF), 0x80); // high byte
/// assert_eq!(cpu.memory().read(0x01FE), 0x03); // low byte
/// ```
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let return_address = cpu.pc.wrapping_add(3);

    cpu.push((return_address >> 8) as u8);
    cpu.push((return_address & 0xFF) as u8);

    cpu.pc = ctx.address;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the low byte, then the high byte, and jumps to the rebuilt address.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;

    cpu.pc = (hi << 8) | lo;
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// No interrupt ever pushes a frame here, so RTI leaves the stack and flags alone and
/// the engine steps over it like a one-byte NOP.
pub(crate) fn rti<M: MemoryBus>(_cpu: &mut CPU<M>) {}
