//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each instruction has an accumulator form and a memory form (read, shift, write back).
//! The bit shifted out lands in C; Z and N come from the result.

use crate::{InstructionContext, MemoryBus, CPU};

fn shift_left(value: u8, carry_in: bool) -> (u8, bool) {
    ((value << 1) | carry_in as u8, value & 0x80 != 0)
}

fn shift_right(value: u8, carry_in: bool) -> (u8, bool) {
    ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0)
}

/// Applies `op` to the accumulator.
fn modify_accumulator<M, F>(cpu: &mut CPU<M>, op: F)
where
    M: MemoryBus,
    F: FnOnce(u8, bool) -> (u8, bool),
{
    let (result, carry) = op(cpu.a, cpu.flags.carry);

    cpu.a = result;
    cpu.flags.carry = carry;
    cpu.flags.set_zero_negative(result);
}

/// Applies `op` to the byte at the resolved address and writes it back.
fn modify_memory<M, F>(cpu: &mut CPU<M>, ctx: &InstructionContext, op: F)
where
    M: MemoryBus,
    F: FnOnce(u8, bool) -> (u8, bool),
{
    let value = cpu.memory.read(ctx.address);
    let (result, carry) = op(value, cpu.flags.carry);

    cpu.memory.write(ctx.address, result);
    cpu.flags.carry = carry;
    cpu.flags.set_zero_negative(result);
}

/// ASL A - bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn asl_accumulator<M: MemoryBus>(cpu: &mut CPU<M>) {
    modify_accumulator(cpu, |v, _| shift_left(v, false));
}

pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    modify_memory(cpu, ctx, |v, _| shift_left(v, false));
}

/// LSR A - bit 0 goes to carry, bit 7 becomes 0 (so N is always cleared).
pub(crate) fn lsr_accumulator<M: MemoryBus>(cpu: &mut CPU<M>) {
    modify_accumulator(cpu, |v, _| shift_right(v, false));
}

pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    modify_memory(cpu, ctx, |v, _| shift_right(v, false));
}

/// ROL A - old carry enters bit 0, bit 7 goes to carry.
pub(crate) fn rol_accumulator<M: MemoryBus>(cpu: &mut CPU<M>) {
    modify_accumulator(cpu, shift_left);
}

pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    modify_memory(cpu, ctx, shift_left);
}

/// ROR A - old carry enters bit 7, bit 0 goes to carry.
pub(crate) fn ror_accumulator<M: MemoryBus>(cpu: &mut CPU<M>) {
    modify_accumulator(cpu, shift_right);
}

pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    modify_memory(cpu, ctx, shift_right);
}
