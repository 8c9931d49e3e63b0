//! # Addressing Modes
//!
//! This module defines the addressing modes of the 6502 and the resolver that turns
//! the bytes following an opcode into an [`InstructionContext`].
//!
//! Resolution only reads memory; it never writes and never moves PC. The engine in
//! `cpu` applies the PC advance after the handler has run.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator, Illegal
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndexedIndirectX,
///   IndirectIndexedY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (branch if zero flag set, offset is relative to PC + 2)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40 within zero page, read the 16-bit pointer
    /// stored there, load from the pointed-to address)
    IndexedIndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit pointer from ZP 0x40, add Y, load from result)
    IndirectIndexedY,

    /// Byte with no instruction behind it. The engine rejects it without side effects.
    Illegal,
}

impl AddressingMode {
    /// Total instruction size in bytes (opcode + operands).
    ///
    /// This is also the engine's default PC advance for the mode.
    pub const fn size_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator | AddressingMode::Illegal => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndexedIndirectX
            | AddressingMode::IndirectIndexedY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        }
    }

    /// Human-readable name, as a status or opcode listing would print it.
    pub const fn name(self) -> &'static str {
        match self {
            AddressingMode::Implied => "Implied",
            AddressingMode::Accumulator => "Accumulator",
            AddressingMode::Immediate => "Immediate",
            AddressingMode::ZeroPage => "Zero Page",
            AddressingMode::ZeroPageX => "Zero Page, X",
            AddressingMode::ZeroPageY => "Zero Page, Y",
            AddressingMode::Relative => "Relative",
            AddressingMode::Absolute => "Absolute",
            AddressingMode::AbsoluteX => "Absolute, X",
            AddressingMode::AbsoluteY => "Absolute, Y",
            AddressingMode::Indirect => "Indirect",
            AddressingMode::IndexedIndirectX => "Indirect, X",
            AddressingMode::IndirectIndexedY => "Indirect, Y",
            AddressingMode::Illegal => "Illegal",
        }
    }
}

/// Operand data resolved for a single instruction.
///
/// Built fresh by the engine for every executed instruction and dropped once the
/// handler returns. Which fields are meaningful depends on the addressing mode;
/// the rest stay zero.
///
/// | Mode | `operand` | `zero_page` | `offset` | `address` |
/// |------|-----------|-------------|----------|-----------|
/// | Immediate | byte at PC+1 | | | |
/// | ZeroPage, ZeroPageX/Y | memory at `address` | byte at PC+1 | | effective zero page address |
/// | Relative | byte at PC+1 | | signed byte at PC+1 | |
/// | Absolute, AbsoluteX/Y | memory at `address` | | | effective address |
/// | Indirect | | | | pointer target |
/// | IndexedIndirectX, IndirectIndexedY | memory at `address` | byte at PC+1 | | effective address |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstructionContext {
    /// Immediate value or the byte read from the effective address.
    pub operand: u8,

    /// Zero page address byte taken from the instruction stream.
    pub zero_page: u8,

    /// Relative branch offset.
    pub offset: i8,

    /// Effective 16-bit address.
    pub address: u16,
}

/// Reads a little-endian pointer from zero page, wrapping the high byte within page zero.
fn read_zero_page_word<M: MemoryBus>(memory: &M, ptr: u8) -> u16 {
    let lo = memory.read(ptr as u16) as u16;
    let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the operand bytes at PC+1.. for `mode` into an instruction context.
    pub(crate) fn resolve(&self, mode: AddressingMode) -> InstructionContext {
        let operand_addr = self.pc.wrapping_add(1);
        let mut ctx = InstructionContext::default();

        match mode {
            AddressingMode::Implied | AddressingMode::Accumulator | AddressingMode::Illegal => {}

            AddressingMode::Immediate => {
                ctx.operand = self.memory.read(operand_addr);
            }

            AddressingMode::ZeroPage | AddressingMode::ZeroPageX | AddressingMode::ZeroPageY => {
                let zp = self.memory.read(operand_addr);
                let index = match mode {
                    AddressingMode::ZeroPageX => self.x,
                    AddressingMode::ZeroPageY => self.y,
                    _ => 0,
                };

                ctx.zero_page = zp;
                // Indexed zero page stays inside page zero
                ctx.address = zp.wrapping_add(index) as u16;
                ctx.operand = self.memory.read(ctx.address);
            }

            AddressingMode::Relative => {
                let offset = self.memory.read(operand_addr);
                ctx.operand = offset;
                ctx.offset = offset as i8;
            }

            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => {
                let base = self.memory.read_word(operand_addr);
                let index = match mode {
                    AddressingMode::AbsoluteX => self.x,
                    AddressingMode::AbsoluteY => self.y,
                    _ => 0,
                };

                ctx.address = base.wrapping_add(index as u16);
                ctx.operand = self.memory.read(ctx.address);
            }

            AddressingMode::Indirect => {
                let ptr = self.memory.read_word(operand_addr);

                // NMOS quirk: a pointer at $xxFF takes its high byte from $xx00
                let lo = self.memory.read(ptr) as u16;
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.memory.read(hi_addr) as u16;

                ctx.address = (hi << 8) | lo;
            }

            AddressingMode::IndexedIndirectX => {
                let zp = self.memory.read(operand_addr);

                ctx.zero_page = zp;
                ctx.address = read_zero_page_word(&self.memory, zp.wrapping_add(self.x));
                ctx.operand = self.memory.read(ctx.address);
            }

            AddressingMode::IndirectIndexedY => {
                let zp = self.memory.read(operand_addr);
                let base = read_zero_page_word(&self.memory, zp);

                ctx.zero_page = zp;
                ctx.address = base.wrapping_add(self.y as u16);
                ctx.operand = self.memory.read(ctx.address);
            }
        }

        ctx
    }
}
