//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load the resolved operand into a register, update Z and N
//! - STA, STX, STY: write a register to the resolved address, no flags affected

use crate::{InstructionContext, MemoryBus, CPU};

/// LDA - Load Accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    cpu.a = ctx.operand;
    cpu.flags.set_zero_negative(cpu.a);
}

/// LDX - Load X Register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    cpu.x = ctx.operand;
    cpu.flags.set_zero_negative(cpu.x);
}

/// LDY - Load Y Register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    cpu.y = ctx.operand;
    cpu.flags.set_zero_negative(cpu.y);
}

/// STA - Store Accumulator.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// // LDA #$42, STA $0200
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.load_program(&[0xA9, 0x42, 0x8D, 0x00, 0x02]).unwrap();
/// cpu.reset();
/// cpu.step();
/// cpu.step();
///
/// assert_eq!(cpu.memory().read(0x0200), 0x42);
/// assert_eq!(cpu.pc(), 0x8005);
/// ```
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    cpu.memory.write(ctx.address, cpu.a);
}

/// STX - Store X Register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    cpu.memory.write(ctx.address, cpu.x);
}

/// STY - Store Y Register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    cpu.memory.write(ctx.address, cpu.y);
}
