//! # Increment and Decrement Instructions
//!
//! - INC, DEC: read-modify-write on the resolved address
//! - INX, INY, DEX, DEY: adjust an index register
//!
//! All wrap modulo 256 and set Z and N from the new value. Carry is not affected.

use crate::{InstructionContext, MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let value = cpu.memory.read(ctx.address).wrapping_add(1);
    cpu.memory.write(ctx.address, value);
    cpu.flags.set_zero_negative(value);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let value = cpu.memory.read(ctx.address).wrapping_sub(1);
    cpu.memory.write(ctx.address, value);
    cpu.flags.set_zero_negative(value);
}

pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.flags.set_zero_negative(cpu.x);
}

pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.flags.set_zero_negative(cpu.y);
}

pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.flags.set_zero_negative(cpu.x);
}

pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.flags.set_zero_negative(cpu.y);
}
