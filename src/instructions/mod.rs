//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all executed 6502 instructions, organized
//! by category. Each handler is a standalone function taking the CPU (which owns the bus)
//! and the resolved [`InstructionContext`]; it mutates registers, flags or memory in place.
//!
//! Handlers never advance PC for the instruction bytes. The engine does that afterwards,
//! except for instructions flagged `manages_pc` in the opcode table, which assign PC
//! themselves.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::{AddressingMode, InstructionContext};
use crate::opcodes::{Instruction, OpcodeMetadata};
use crate::{ExecutionError, MemoryBus, CPU};

/// Runs the handler for `metadata.instruction`.
///
/// # Errors
///
/// [`ExecutionError::IllegalOpcode`] for BRK and illegal bytes. The engine filters
/// these before resolving, so reaching that arm means the table and the engine disagree.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    ctx: &InstructionContext,
) -> Result<(), ExecutionError> {
    let on_accumulator = metadata.addressing_mode == AddressingMode::Accumulator;

    match metadata.instruction {
        // Load/store
        Instruction::Lda => load_store::lda(cpu, ctx),
        Instruction::Ldx => load_store::ldx(cpu, ctx),
        Instruction::Ldy => load_store::ldy(cpu, ctx),
        Instruction::Sta => load_store::sta(cpu, ctx),
        Instruction::Stx => load_store::stx(cpu, ctx),
        Instruction::Sty => load_store::sty(cpu, ctx),

        // Register transfers
        Instruction::Tax => transfer::tax(cpu),
        Instruction::Tay => transfer::tay(cpu),
        Instruction::Txa => transfer::txa(cpu),
        Instruction::Tya => transfer::tya(cpu),
        Instruction::Tsx => transfer::tsx(cpu),
        Instruction::Txs => transfer::txs(cpu),

        // Stack
        Instruction::Pha => stack::pha(cpu),
        Instruction::Php => stack::php(cpu),
        Instruction::Pla => stack::pla(cpu),
        Instruction::Plp => stack::plp(cpu),

        // Logical
        Instruction::And => alu::and(cpu, ctx),
        Instruction::Ora => alu::ora(cpu, ctx),
        Instruction::Eor => alu::eor(cpu, ctx),
        Instruction::Bit => alu::bit(cpu, ctx),

        // Arithmetic and compare
        Instruction::Adc => alu::adc(cpu, ctx),
        Instruction::Sbc => alu::sbc(cpu, ctx),
        Instruction::Cmp => alu::cmp(cpu, ctx),
        Instruction::Cpx => alu::cpx(cpu, ctx),
        Instruction::Cpy => alu::cpy(cpu, ctx),

        // Increment/decrement
        Instruction::Inc => inc_dec::inc(cpu, ctx),
        Instruction::Inx => inc_dec::inx(cpu),
        Instruction::Iny => inc_dec::iny(cpu),
        Instruction::Dec => inc_dec::dec(cpu, ctx),
        Instruction::Dex => inc_dec::dex(cpu),
        Instruction::Dey => inc_dec::dey(cpu),

        // Shifts and rotates
        Instruction::Asl if on_accumulator => shifts::asl_accumulator(cpu),
        Instruction::Asl => shifts::asl(cpu, ctx),
        Instruction::Lsr if on_accumulator => shifts::lsr_accumulator(cpu),
        Instruction::Lsr => shifts::lsr(cpu, ctx),
        Instruction::Rol if on_accumulator => shifts::rol_accumulator(cpu),
        Instruction::Rol => shifts::rol(cpu, ctx),
        Instruction::Ror if on_accumulator => shifts::ror_accumulator(cpu),
        Instruction::Ror => shifts::ror(cpu, ctx),

        // Jumps and subroutines
        Instruction::Jmp => control::jmp(cpu, ctx),
        Instruction::Jsr => control::jsr(cpu, ctx),
        Instruction::Rts => control::rts(cpu),
        Instruction::Nop => control::nop(cpu),
        Instruction::Rti => control::rti(cpu),

        // Branches
        Instruction::Bcc => branches::bcc(cpu, ctx),
        Instruction::Bcs => branches::bcs(cpu, ctx),
        Instruction::Beq => branches::beq(cpu, ctx),
        Instruction::Bmi => branches::bmi(cpu, ctx),
        Instruction::Bne => branches::bne(cpu, ctx),
        Instruction::Bpl => branches::bpl(cpu, ctx),
        Instruction::Bvc => branches::bvc(cpu, ctx),
        Instruction::Bvs => branches::bvs(cpu, ctx),

        // Flags
        Instruction::Clc => flags::clc(cpu),
        Instruction::Cld => flags::cld(cpu),
        Instruction::Cli => flags::cli(cpu),
        Instruction::Clv => flags::clv(cpu),
        Instruction::Sec => flags::sec(cpu),
        Instruction::Sed => flags::sed(cpu),
        Instruction::Sei => flags::sei(cpu),

        Instruction::Brk | Instruction::Illegal => {
            return Err(ExecutionError::IllegalOpcode {
                opcode: metadata.opcode,
                pc: cpu.pc,
            });
        }
    }

    Ok(())
}
