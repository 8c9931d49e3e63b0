//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy one register into another and update Z and N from
//! the copied value. TXS copies X into the stack pointer and leaves the flags alone.

use crate::{MemoryBus, CPU};

pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.flags.set_zero_negative(cpu.x);
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.flags.set_zero_negative(cpu.y);
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.flags.set_zero_negative(cpu.a);
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.flags.set_zero_negative(cpu.a);
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp;
    cpu.flags.set_zero_negative(cpu.x);
}

/// TXS - Transfer X to Stack Pointer. Flags are not affected.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}
