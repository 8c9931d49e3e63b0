//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, the default 64KB `FlatMemory`, and the program loader.
//!
//! ## Memory Map
//!
//! Two regions have a fixed meaning for the core:
//!
//! - **Load region**: program images are copied to `LOAD_ADDRESS` (0x8000) and upward
//! - **Vectors**: the last `VECTORS_LEN` bytes (0xFFFA-0xFFFF); the reset vector lives at
//!   0xFFFC (low byte) / 0xFFFD (high byte)
//!
//! The stack occupies page one (0x0100-0x01FF).

use crate::LoadError;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address program images are loaded at.
pub const LOAD_ADDRESS: u16 = 0x8000;

/// Base of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Size of the vector region at the top of the address space (NMI, RESET, IRQ).
pub const VECTORS_LEN: usize = 6;

/// Largest program image `load_program` accepts.
///
/// Half the address space minus the vector region, so an image loaded at
/// `LOAD_ADDRESS` never reaches the vectors.
pub const MAX_PROGRAM_SIZE: usize = (0x10000 / 2) - VECTORS_LEN;

/// Memory bus trait for CPU to read/write bytes.
///
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction. Addresses
/// are `u16`, so every call is in range by construction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads and read-only inspection
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - `write` reports whether the byte was stored, so device-backed buses can refuse
///   writes (ROM, unmapped regions) without a separate error type
///
/// Implementations must complete synchronously; the engine never waits on the bus.
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// assert!(mem.write(0x1234, 0x42));
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) -> bool {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///             true
///         } else {
///             false
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. Bytes that were never written read as whatever
    /// the implementation initialises them to (0x00 for `FlatMemory`).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Returns `true` if the byte was stored. This method must never panic.
    fn write(&mut self, addr: u16, value: u8) -> bool;

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// The high byte address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous RAM array,
/// initialised to 0x00. Every write succeeds.
///
/// # Examples
///
/// ```
/// use cpu6502::{FlatMemory, MemoryBus};
///
/// let mem = FlatMemory::new();
/// assert_eq!(mem.read(0x0000), 0x00);
/// assert_eq!(mem.read(0xFFFF), 0x00);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Returns the raw contents of `len` bytes starting at `start`, clamped to the
    /// end of the address space.
    pub fn slice(&self, start: u16, len: usize) -> &[u8] {
        let start = start as usize;
        let end = start.saturating_add(len).min(self.data.len());
        &self.data[start..end]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("len", &self.data.len())
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) -> bool {
        self.data[addr as usize] = value;
        true
    }
}

/// Copies a program image to `LOAD_ADDRESS` and points the reset vector at it.
///
/// The load is all-or-nothing: the size check happens before anything is written, and
/// if the bus refuses an image write the bytes already copied are put back. A refused
/// reset vector write is not an error; the image stays loaded and the existing vector
/// is kept. Returns the number of bytes written.
///
/// The CPU is not reset here; call [`CPU::reset`](crate::CPU::reset) afterwards to start
/// execution at the image.
///
/// # Errors
///
/// - [`LoadError::ProgramTooLarge`] if `program.len()` exceeds [`MAX_PROGRAM_SIZE`]
/// - [`LoadError::WriteRejected`] if the bus refuses one of the image writes
///
/// # Examples
///
/// ```
/// use cpu6502::{load_program, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// assert_eq!(load_program(&mut mem, &[0xEA, 0xEA]), Ok(2));
/// assert_eq!(mem.read(0x8001), 0xEA);
/// assert_eq!(mem.read_word(0xFFFC), 0x8000);
/// ```
pub fn load_program<M: MemoryBus>(memory: &mut M, program: &[u8]) -> Result<usize, LoadError> {
    if program.len() > MAX_PROGRAM_SIZE {
        log::debug!(
            "rejecting {} byte program image (limit {})",
            program.len(),
            MAX_PROGRAM_SIZE
        );
        return Err(LoadError::ProgramTooLarge {
            size: program.len(),
            max: MAX_PROGRAM_SIZE,
        });
    }

    let mut previous = Vec::with_capacity(program.len());

    for (offset, &byte) in program.iter().enumerate() {
        // Cannot overflow: offset < MAX_PROGRAM_SIZE keeps the address below the vectors
        let addr = LOAD_ADDRESS + offset as u16;
        let old = memory.read(addr);

        if !memory.write(addr, byte) {
            log::debug!("bus refused image write at 0x{:04X}, rolling back", addr);
            for (i, &old) in previous.iter().enumerate() {
                memory.write(LOAD_ADDRESS + i as u16, old);
            }
            return Err(LoadError::WriteRejected { addr });
        }
        previous.push(old);
    }

    let [lo, hi] = LOAD_ADDRESS.to_le_bytes();
    if !(memory.write(RESET_VECTOR, lo) && memory.write(RESET_VECTOR + 1, hi)) {
        log::debug!("bus refused reset vector write, keeping existing vector");
    }

    log::debug!(
        "loaded {} byte program at 0x{:04X}",
        program.len(),
        LOAD_ADDRESS
    );

    Ok(program.len())
}
