//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for program loading, stepping and
//! read-only state inspection.

use crate::{lookup, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator with 64KB of zeroed RAM and PC at the load region
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Load a program image at $8000 and reset the CPU into it
    pub fn load_program(&mut self, program: &[u8]) -> Result<usize, JsError> {
        let written = self
            .cpu
            .load_program(program)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.cpu.reset();
        Ok(written)
    }

    /// Reset registers and jump through the reset vector; memory is kept
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute a single instruction, returning the opcode or 0x7FFF
    pub fn step(&mut self) -> u16 {
        self.cpu.step()
    }

    /// Execute up to `count` instructions, stopping at the first illegal opcode
    pub fn run(&mut self, count: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for_instructions(count as usize)
            .map(|n| n as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    /// Packed status register (NV-BDIZC)
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Set the program counter, e.g. to skip past an illegal opcode
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Copy `len` bytes starting at `start` (clamped to the end of memory)
    pub fn memory_range(&self, start: u16, len: usize) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.cpu.memory().slice(start, len))
    }

    /// Mnemonic for an opcode byte ("ILLG" for illegal opcodes)
    pub fn mnemonic(&self, opcode: u8) -> String {
        lookup(opcode).mnemonic.to_string()
    }

    /// Addressing mode name for an opcode byte
    pub fn addressing_mode(&self, opcode: u8) -> String {
        lookup(opcode).addressing_mode.name().to_string()
    }
}
