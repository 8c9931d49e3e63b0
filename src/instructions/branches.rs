//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on Carry Clear / Set
//! - BEQ / BNE: Branch on Zero Set / Clear
//! - BMI / BPL: Branch on Negative Set / Clear
//! - BVC / BVS: Branch on Overflow Clear / Set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset, measured
//! from the address after the 2-byte instruction. Branches always assign PC: the target
//! when taken, PC + 2 otherwise. No flags are affected.

use crate::{InstructionContext, MemoryBus, CPU};

fn branch<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext, condition: bool) {
    let next = cpu.pc.wrapping_add(2);

    cpu.pc = if condition {
        next.wrapping_add_signed(ctx.offset as i16)
    } else {
        next
    };
}

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// // BCC -2 loops on itself while carry is clear
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.load_program(&[0x90, 0xFE]).unwrap();
/// cpu.reset();
///
/// cpu.step();
/// assert_eq!(cpu.pc(), 0x8000);
///
/// cpu.set_flag_c(true);
/// cpu.step();
/// assert_eq!(cpu.pc(), 0x8002);
/// ```
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let condition = !cpu.flags.carry;
    branch(cpu, ctx, condition);
}

pub(crate) fn bcs<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let condition = cpu.flags.carry;
    branch(cpu, ctx, condition);
}

pub(crate) fn beq<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let condition = cpu.flags.zero;
    branch(cpu, ctx, condition);
}

pub(crate) fn bne<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let condition = !cpu.flags.zero;
    branch(cpu, ctx, condition);
}

pub(crate) fn bmi<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let condition = cpu.flags.negative;
    branch(cpu, ctx, condition);
}

pub(crate) fn bpl<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let condition = !cpu.flags.negative;
    branch(cpu, ctx, condition);
}

pub(crate) fn bvc<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let condition = !cpu.flags.overflow;
    branch(cpu, ctx, condition);
}

pub(crate) fn bvs<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let condition = cpu.flags.overflow;
    branch(cpu, ctx, condition);
}
