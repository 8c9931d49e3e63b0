//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare a register with memory
//!
//! Decimal mode is ignored; ADC and SBC always operate in binary.

use crate::{InstructionContext, MemoryBus, CPU};

/// Binary add of `value` and the carry flag into the accumulator.
///
/// Carry is set when the 9-bit sum exceeds 0xFF. Overflow is set when both inputs
/// share a sign the result does not have.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.flags.carry as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.flags.carry = sum > 0xFF;
    cpu.flags.overflow = (!(a ^ value) & (a ^ result) & 0x80) != 0;

    cpu.a = result;
    cpu.flags.set_zero_negative(result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory};
///
/// // LDA #$50, ADC #$50
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.load_program(&[0xA9, 0x50, 0x69, 0x50]).unwrap();
/// cpu.reset();
/// cpu.step();
/// cpu.step();
///
/// assert_eq!(cpu.a(), 0xA0);
/// assert!(cpu.flag_v()); // two positives gave a negative
/// assert!(!cpu.flag_c());
/// ```
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    add_with_carry(cpu, ctx.operand);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computed as `A + !M + C`: subtraction is addition of the one's complement, with the
/// carry flag acting as "no borrow". After the operation C is set when no borrow
/// occurred (`A >= M + borrow`) and V by the sign test against the complemented operand.
///
/// C is derived from the 9-bit sum (`A + !M + C > 0xFF`), which is what "no borrow"
/// means, rather than from the low byte of the result being non-zero.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    add_with_carry(cpu, ctx.operand ^ 0xFF);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    cpu.a &= ctx.operand;
    cpu.flags.set_zero_negative(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    cpu.a |= ctx.operand;
    cpu.flags.set_zero_negative(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    cpu.a ^= ctx.operand;
    cpu.flags.set_zero_negative(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// ANDs the accumulator with the operand without storing the result. V takes bit 6
/// of the AND result; Z and N are set from the AND result.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let result = cpu.a & ctx.operand;

    cpu.flags.overflow = result & 0x40 != 0;
    cpu.flags.set_zero_negative(result);
}

/// Shared compare: C = register >= M, Z = register == M, N = bit 7 of register - M.
///
/// All three flags come from `register`; the register itself is not modified.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);

    cpu.flags.carry = register >= value;
    cpu.flags.zero = register == value;
    cpu.flags.negative = result & 0x80 != 0;
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let a = cpu.a;
    compare(cpu, a, ctx.operand);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let x = cpu.x;
    compare(cpu, x, ctx.operand);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, ctx: &InstructionContext) {
    let y = cpu.y;
    compare(cpu, y, ctx.operand);
}
