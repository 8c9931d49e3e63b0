//! # Opcode Table
//!
//! This module contains the complete 256-entry opcode table that serves as the
//! single source of truth for decoding: every byte value maps to exactly one entry
//! holding its mnemonic, addressing mode and instruction.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked with the "ILLG" mnemonic and the
//!   `Illegal` addressing mode
//!
//! The table is a `const`, built at compile time and never mutated, so it can be shared
//! freely between threads.

use crate::addressing::AddressingMode;

/// The documented 6502 instructions, plus a catch-all for illegal opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Byte with no documented instruction.
    Illegal,
}

impl Instruction {
    /// Assembler mnemonic, "ILLG" for illegal opcodes.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Adc => "ADC",
            Instruction::And => "AND",
            Instruction::Asl => "ASL",
            Instruction::Bcc => "BCC",
            Instruction::Bcs => "BCS",
            Instruction::Beq => "BEQ",
            Instruction::Bit => "BIT",
            Instruction::Bmi => "BMI",
            Instruction::Bne => "BNE",
            Instruction::Bpl => "BPL",
            Instruction::Brk => "BRK",
            Instruction::Bvc => "BVC",
            Instruction::Bvs => "BVS",
            Instruction::Clc => "CLC",
            Instruction::Cld => "CLD",
            Instruction::Cli => "CLI",
            Instruction::Clv => "CLV",
            Instruction::Cmp => "CMP",
            Instruction::Cpx => "CPX",
            Instruction::Cpy => "CPY",
            Instruction::Dec => "DEC",
            Instruction::Dex => "DEX",
            Instruction::Dey => "DEY",
            Instruction::Eor => "EOR",
            Instruction::Inc => "INC",
            Instruction::Inx => "INX",
            Instruction::Iny => "INY",
            Instruction::Jmp => "JMP",
            Instruction::Jsr => "JSR",
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Lsr => "LSR",
            Instruction::Nop => "NOP",
            Instruction::Ora => "ORA",
            Instruction::Pha => "PHA",
            Instruction::Php => "PHP",
            Instruction::Pla => "PLA",
            Instruction::Plp => "PLP",
            Instruction::Rol => "ROL",
            Instruction::Ror => "ROR",
            Instruction::Rti => "RTI",
            Instruction::Rts => "RTS",
            Instruction::Sbc => "SBC",
            Instruction::Sec => "SEC",
            Instruction::Sed => "SED",
            Instruction::Sei => "SEI",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Tax => "TAX",
            Instruction::Tay => "TAY",
            Instruction::Tsx => "TSX",
            Instruction::Txa => "TXA",
            Instruction::Txs => "TXS",
            Instruction::Tya => "TYA",
            Instruction::Illegal => "ILLG",
        }
    }

    /// Whether the instruction assigns PC itself.
    ///
    /// The engine skips its default PC advance for these: jumps, subroutine call and
    /// return, and the conditional branches (which advance PC even when not taken).
    pub const fn manages_pc(self) -> bool {
        matches!(
            self,
            Instruction::Jmp
                | Instruction::Jsr
                | Instruction::Rts
                | Instruction::Bcc
                | Instruction::Bcs
                | Instruction::Beq
                | Instruction::Bmi
                | Instruction::Bne
                | Instruction::Bpl
                | Instruction::Bvc
                | Instruction::Bvs
        )
    }

    /// Whether the engine executes this instruction.
    ///
    /// BRK is named in the table but rejected the same way illegal opcodes are, so a
    /// zero-filled region stops a stepping loop. RTI runs as a one-byte no-op since
    /// interrupts are not emulated.
    pub const fn is_executable(self) -> bool {
        !matches!(self, Instruction::Brk | Instruction::Illegal)
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Table entry for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{lookup, AddressingMode, Instruction};
///
/// // LDA immediate (opcode 0xA9)
/// let lda_imm = lookup(0xA9);
/// assert_eq!(lda_imm.opcode, 0xA9);
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert!(!lda_imm.manages_pc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Opcode byte; always equal to this entry's index in `OPCODE_TABLE`.
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "ILLG" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Instruction the engine dispatches to.
    pub instruction: Instruction,

    /// Set when the instruction assigns PC itself and the engine must not advance it.
    pub manages_pc: bool,
}

impl OpcodeMetadata {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        self.addressing_mode.size_bytes()
    }

    /// Whether the byte decodes to something the engine will execute.
    pub const fn is_executable(&self) -> bool {
        !matches!(self.addressing_mode, AddressingMode::Illegal)
            && self.instruction.is_executable()
    }
}

const fn entry(opcode: u8, instruction: Instruction, mode: AddressingMode) -> OpcodeMetadata {
    OpcodeMetadata {
        opcode,
        mnemonic: instruction.mnemonic(),
        addressing_mode: mode,
        instruction,
        manages_pc: instruction.manages_pc(),
    }
}

const fn illegal(opcode: u8) -> OpcodeMetadata {
    entry(opcode, Instruction::Illegal, AddressingMode::Illegal)
}

/// Looks up the table entry for an opcode byte.
///
/// Pure and constant-time; disassemblers and status printers use it to name opcodes.
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    const TABLE: &[OpcodeMetadata; 256] = &OPCODE_TABLE;
    &TABLE[opcode as usize]
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, OPCODE_TABLE};
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "ILLG");
/// assert_eq!(illegal.addressing_mode, AddressingMode::Illegal);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use AddressingMode::{
        Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, IndexedIndirectX,
        Indirect, IndirectIndexedY, Relative, ZeroPage, ZeroPageX, ZeroPageY,
    };
    use Instruction::*;

    [
        entry(0x00, Brk, Implied),
        entry(0x01, Ora, IndexedIndirectX),
        illegal(0x02),
        illegal(0x03),
        illegal(0x04),
        entry(0x05, Ora, ZeroPage),
        entry(0x06, Asl, ZeroPage),
        illegal(0x07),
        entry(0x08, Php, Implied),
        entry(0x09, Ora, Immediate),
        entry(0x0A, Asl, Accumulator),
        illegal(0x0B),
        illegal(0x0C),
        entry(0x0D, Ora, Absolute),
        entry(0x0E, Asl, Absolute),
        illegal(0x0F),

        entry(0x10, Bpl, Relative),
        entry(0x11, Ora, IndirectIndexedY),
        illegal(0x12),
        illegal(0x13),
        illegal(0x14),
        entry(0x15, Ora, ZeroPageX),
        entry(0x16, Asl, ZeroPageX),
        illegal(0x17),
        entry(0x18, Clc, Implied),
        entry(0x19, Ora, AbsoluteY),
        illegal(0x1A),
        illegal(0x1B),
        illegal(0x1C),
        entry(0x1D, Ora, AbsoluteX),
        entry(0x1E, Asl, AbsoluteX),
        illegal(0x1F),

        entry(0x20, Jsr, Absolute),
        entry(0x21, And, IndexedIndirectX),
        illegal(0x22),
        illegal(0x23),
        entry(0x24, Bit, ZeroPage),
        entry(0x25, And, ZeroPage),
        entry(0x26, Rol, ZeroPage),
        illegal(0x27),
        entry(0x28, Plp, Implied),
        entry(0x29, And, Immediate),
        entry(0x2A, Rol, Accumulator),
        illegal(0x2B),
        entry(0x2C, Bit, Absolute),
        entry(0x2D, And, Absolute),
        entry(0x2E, Rol, Absolute),
        illegal(0x2F),

        entry(0x30, Bmi, Relative),
        entry(0x31, And, IndirectIndexedY),
        illegal(0x32),
        illegal(0x33),
        illegal(0x34),
        entry(0x35, And, ZeroPageX),
        entry(0x36, Rol, ZeroPageX),
        illegal(0x37),
        entry(0x38, Sec, Implied),
        entry(0x39, And, AbsoluteY),
        illegal(0x3A),
        illegal(0x3B),
        illegal(0x3C),
        entry(0x3D, And, AbsoluteX),
        entry(0x3E, Rol, AbsoluteX),
        illegal(0x3F),

        entry(0x40, Rti, Implied),
        entry(0x41, Eor, IndexedIndirectX),
        illegal(0x42),
        illegal(0x43),
        illegal(0x44),
        entry(0x45, Eor, ZeroPage),
        entry(0x46, Lsr, ZeroPage),
        illegal(0x47),
        entry(0x48, Pha, Implied),
        entry(0x49, Eor, Immediate),
        entry(0x4A, Lsr, Accumulator),
        illegal(0x4B),
        entry(0x4C, Jmp, Absolute),
        entry(0x4D, Eor, Absolute),
        entry(0x4E, Lsr, Absolute),
        illegal(0x4F),

        entry(0x50, Bvc, Relative),
        entry(0x51, Eor, IndirectIndexedY),
        illegal(0x52),
        illegal(0x53),
        illegal(0x54),
        entry(0x55, Eor, ZeroPageX),
        entry(0x56, Lsr, ZeroPageX),
        illegal(0x57),
        entry(0x58, Cli, Implied),
        entry(0x59, Eor, AbsoluteY),
        illegal(0x5A),
        illegal(0x5B),
        illegal(0x5C),
        entry(0x5D, Eor, AbsoluteX),
        entry(0x5E, Lsr, AbsoluteX),
        illegal(0x5F),

        entry(0x60, Rts, Implied),
        entry(0x61, Adc, IndexedIndirectX),
        illegal(0x62),
        illegal(0x63),
        illegal(0x64),
        entry(0x65, Adc, ZeroPage),
        entry(0x66, Ror, ZeroPage),
        illegal(0x67),
        entry(0x68, Pla, Implied),
        entry(0x69, Adc, Immediate),
        entry(0x6A, Ror, Accumulator),
        illegal(0x6B),
        entry(0x6C, Jmp, Indirect),
        entry(0x6D, Adc, Absolute),
        entry(0x6E, Ror, Absolute),
        illegal(0x6F),

        entry(0x70, Bvs, Relative),
        entry(0x71, Adc, IndirectIndexedY),
        illegal(0x72),
        illegal(0x73),
        illegal(0x74),
        entry(0x75, Adc, ZeroPageX),
        entry(0x76, Ror, ZeroPageX),
        illegal(0x77),
        entry(0x78, Sei, Implied),
        entry(0x79, Adc, AbsoluteY),
        illegal(0x7A),
        illegal(0x7B),
        illegal(0x7C),
        entry(0x7D, Adc, AbsoluteX),
        entry(0x7E, Ror, AbsoluteX),
        illegal(0x7F),

        illegal(0x80),
        entry(0x81, Sta, IndexedIndirectX),
        illegal(0x82),
        illegal(0x83),
        entry(0x84, Sty, ZeroPage),
        entry(0x85, Sta, ZeroPage),
        entry(0x86, Stx, ZeroPage),
        illegal(0x87),
        entry(0x88, Dey, Implied),
        illegal(0x89),
        entry(0x8A, Txa, Implied),
        illegal(0x8B),
        entry(0x8C, Sty, Absolute),
        entry(0x8D, Sta, Absolute),
        entry(0x8E, Stx, Absolute),
        illegal(0x8F),

        entry(0x90, Bcc, Relative),
        entry(0x91, Sta, IndirectIndexedY),
        illegal(0x92),
        illegal(0x93),
        entry(0x94, Sty, ZeroPageX),
        entry(0x95, Sta, ZeroPageX),
        entry(0x96, Stx, ZeroPageY),
        illegal(0x97),
        entry(0x98, Tya, Implied),
        entry(0x99, Sta, AbsoluteY),
        entry(0x9A, Txs, Implied),
        illegal(0x9B),
        illegal(0x9C),
        entry(0x9D, Sta, AbsoluteX),
        illegal(0x9E),
        illegal(0x9F),

        entry(0xA0, Ldy, Immediate),
        entry(0xA1, Lda, IndexedIndirectX),
        entry(0xA2, Ldx, Immediate),
        illegal(0xA3),
        entry(0xA4, Ldy, ZeroPage),
        entry(0xA5, Lda, ZeroPage),
        entry(0xA6, Ldx, ZeroPage),
        illegal(0xA7),
        entry(0xA8, Tay, Implied),
        entry(0xA9, Lda, Immediate),
        entry(0xAA, Tax, Implied),
        illegal(0xAB),
        entry(0xAC, Ldy, Absolute),
        entry(0xAD, Lda, Absolute),
        entry(0xAE, Ldx, Absolute),
        illegal(0xAF),

        entry(0xB0, Bcs, Relative),
        entry(0xB1, Lda, IndirectIndexedY),
        illegal(0xB2),
        illegal(0xB3),
        entry(0xB4, Ldy, ZeroPageX),
        entry(0xB5, Lda, ZeroPageX),
        entry(0xB6, Ldx, ZeroPageY),
        illegal(0xB7),
        entry(0xB8, Clv, Implied),
        entry(0xB9, Lda, AbsoluteY),
        entry(0xBA, Tsx, Implied),
        illegal(0xBB),
        entry(0xBC, Ldy, AbsoluteX),
        entry(0xBD, Lda, AbsoluteX),
        entry(0xBE, Ldx, AbsoluteY),
        illegal(0xBF),

        entry(0xC0, Cpy, Immediate),
        entry(0xC1, Cmp, IndexedIndirectX),
        illegal(0xC2),
        illegal(0xC3),
        entry(0xC4, Cpy, ZeroPage),
        entry(0xC5, Cmp, ZeroPage),
        entry(0xC6, Dec, ZeroPage),
        illegal(0xC7),
        entry(0xC8, Iny, Implied),
        entry(0xC9, Cmp, Immediate),
        entry(0xCA, Dex, Implied),
        illegal(0xCB),
        entry(0xCC, Cpy, Absolute),
        entry(0xCD, Cmp, Absolute),
        entry(0xCE, Dec, Absolute),
        illegal(0xCF),

        entry(0xD0, Bne, Relative),
        entry(0xD1, Cmp, IndirectIndexedY),
        illegal(0xD2),
        illegal(0xD3),
        illegal(0xD4),
        entry(0xD5, Cmp, ZeroPageX),
        entry(0xD6, Dec, ZeroPageX),
        illegal(0xD7),
        entry(0xD8, Cld, Implied),
        entry(0xD9, Cmp, AbsoluteY),
        illegal(0xDA),
        illegal(0xDB),
        illegal(0xDC),
        entry(0xDD, Cmp, AbsoluteX),
        entry(0xDE, Dec, AbsoluteX),
        illegal(0xDF),

        entry(0xE0, Cpx, Immediate),
        entry(0xE1, Sbc, IndexedIndirectX),
        illegal(0xE2),
        illegal(0xE3),
        entry(0xE4, Cpx, ZeroPage),
        entry(0xE5, Sbc, ZeroPage),
        entry(0xE6, Inc, ZeroPage),
        illegal(0xE7),
        entry(0xE8, Inx, Implied),
        entry(0xE9, Sbc, Immediate),
        entry(0xEA, Nop, Implied),
        illegal(0xEB),
        entry(0xEC, Cpx, Absolute),
        entry(0xED, Sbc, Absolute),
        entry(0xEE, Inc, Absolute),
        illegal(0xEF),

        entry(0xF0, Beq, Relative),
        entry(0xF1, Sbc, IndirectIndexedY),
        illegal(0xF2),
        illegal(0xF3),
        illegal(0xF4),
        entry(0xF5, Sbc, ZeroPageX),
        entry(0xF6, Inc, ZeroPageX),
        illegal(0xF7),
        entry(0xF8, Sed, Implied),
        entry(0xF9, Sbc, AbsoluteY),
        illegal(0xFA),
        illegal(0xFB),
        illegal(0xFC),
        entry(0xFD, Sbc, AbsoluteX),
        entry(0xFE, Inc, AbsoluteX),
        illegal(0xFF),
    ]
};
