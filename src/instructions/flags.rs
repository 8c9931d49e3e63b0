//! # Status Flag Instructions
//!
//! Set or clear a single flag: CLC/SEC (carry), CLI/SEI (interrupt disable),
//! CLD/SED (decimal, stored only), CLV (overflow; there is no SEV).

use crate::{MemoryBus, CPU};

pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.carry = false;
}

pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.carry = true;
}

pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.interrupt_disable = false;
}

pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.interrupt_disable = true;
}

pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.decimal = false;
}

pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.decimal = true;
}

pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.overflow = false;
}
