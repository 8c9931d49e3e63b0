//! # 6502 Instruction Execution Core
//!
//! An instruction-stepping NMOS 6502 emulator core built around a table-driven
//! fetch-decode-resolve-execute engine.
//!
//! This crate provides the register file and status flags, a trait-based memory bus
//! abstraction, a 256-entry opcode table, and the addressing-mode resolver that binds
//! every opcode to its semantic handler.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{FlatMemory, CPU};
//!
//! // LDA #$05, TAX
//! let mut cpu = CPU::new(FlatMemory::new());
//! cpu.load_program(&[0xA9, 0x05, 0xAA]).unwrap();
//! cpu.reset();
//!
//! assert_eq!(cpu.step(), 0xA9);
//! assert_eq!(cpu.step(), 0xAA);
//!
//! assert_eq!(cpu.a(), 0x05);
//! assert_eq!(cpu.x(), 0x05);
//! assert_eq!(cpu.pc(), 0x8003);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory implementation via the `MemoryBus` trait
//! - **Table-Driven Design**: Every opcode's mnemonic, addressing mode and instruction live in
//!   one compile-time table
//! - **Explicit PC policy**: instructions that redirect the program counter say so in the table,
//!   the engine never infers it from handler identity
//! - **WebAssembly Portability**: No OS dependencies, deterministic execution
//!
//! Cycle timing, decimal mode arithmetic and interrupt delivery are not modelled.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the execution engine
//! - `memory` - MemoryBus trait, flat RAM and program loading
//! - `opcodes` - Opcode table and instruction enumeration
//! - `addressing` - Addressing modes and operand resolution
//! - `status` - Packed/unpacked processor status flags

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, InstructionContext};
pub use cpu::{Registers, RunOutcome, RunSummary, CPU, INVALID_INSTRUCTION};
pub use memory::{
    load_program, FlatMemory, MemoryBus, LOAD_ADDRESS, MAX_PROGRAM_SIZE, RESET_VECTOR,
    STACK_BASE, VECTORS_LEN,
};
pub use opcodes::{lookup, Instruction, OpcodeMetadata, OPCODE_TABLE};
pub use status::StatusFlags;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The byte at `pc` does not decode to an instruction this core executes.
    ///
    /// No CPU or memory state was changed; PC still points at the offending byte.
    IllegalOpcode {
        /// The opcode byte that was fetched.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: u16,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, pc } => {
                write!(f, "Illegal opcode 0x{:02X} at 0x{:04X}", opcode, pc)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}

/// Errors that can occur while loading a program image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The image does not fit between the load address and the vector region.
    ProgramTooLarge {
        /// Length of the rejected image in bytes.
        size: usize,
        /// Largest accepted image length.
        max: usize,
    },

    /// The bus refused a write while the image was being copied.
    WriteRejected {
        /// Address of the refused write.
        addr: u16,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadError::ProgramTooLarge { size, max } => {
                write!(f, "Program of {} bytes exceeds the {} byte limit", size, max)
            }
            LoadError::WriteRejected { addr } => {
                write!(f, "Bus rejected write to 0x{:04X}", addr)
            }
        }
    }
}

impl std::error::Error for LoadError {}
