//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-resolve-execute engine.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, unused, B, D, I, Z, C as a [`StatusFlags`]
//!
//! ## Execution Model
//!
//! Each `step()` runs exactly one instruction:
//!
//! 1. Fetch the opcode byte at PC
//! 2. Look it up in [`OPCODE_TABLE`](crate::OPCODE_TABLE); illegal bytes are rejected with no side effects
//! 3. Resolve the addressing mode into an [`InstructionContext`](crate::InstructionContext)
//! 4. Run the instruction handler
//! 5. Advance PC by the instruction size unless the instruction manages PC itself
//!
//! The engine keeps no state between steps; every call is a complete transition.

use crate::instructions;
use crate::memory::{self, LOAD_ADDRESS, RESET_VECTOR, STACK_BASE};
use crate::{lookup, ExecutionError, LoadError, MemoryBus, StatusFlags};

/// Value `step` returns when no instruction was executed.
///
/// Opcodes are single bytes, so this can never collide with an executed opcode.
pub const INVALID_INSTRUCTION: u16 = 0x7FFF;

/// Initial stack pointer after reset.
const RESET_SP: u8 = 0xFF;

/// Snapshot of the register file, for status printers and state comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Stack pointer
    pub sp: u8,
    /// Program counter
    pub pc: u16,
    /// Status flags
    pub flags: StatusFlags,
}

/// Why `run_until` returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The stop predicate accepted the last executed opcode.
    Stopped,
    /// The instruction budget ran out.
    BudgetExhausted,
    /// An illegal opcode was fetched; PC still points at it.
    Halted(ExecutionError),
}

/// Result of a `run_until` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed during the call.
    pub instructions: usize,
    /// Opcode of the last executed instruction, if any ran.
    pub last_opcode: Option<u8>,
    /// Why execution ended.
    pub outcome: RunOutcome,
}

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter
/// and stack pointer, and owns the memory bus it executes against. It is generic over the
/// memory implementation via the `MemoryBus` trait.
///
/// A CPU is driven by a single thread; share it across threads only behind the host's own
/// synchronisation.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory};
///
/// let cpu = CPU::new(FlatMemory::new());
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status(), 0x00);
/// ```
#[derive(Debug, Clone)]
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) flags: StatusFlags,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus, ready to run from the load region.
    ///
    /// The reset vector at 0xFFFC/0xFFFD is pointed at `LOAD_ADDRESS` (0x8000), then the CPU
    /// is reset: A, X, Y and all flags are zero, SP is 0xFF and PC comes from the vector.
    ///
    /// If the bus refuses the vector writes (ROM-backed vectors), PC is taken from whatever
    /// the vector already holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert_eq!(cpu.memory().read(0xFFFD), 0x80);
    /// ```
    pub fn new(mut memory: M) -> Self {
        let [lo, hi] = LOAD_ADDRESS.to_le_bytes();
        if !(memory.write(RESET_VECTOR, lo) && memory.write(RESET_VECTOR + 1, hi)) {
            log::debug!("bus refused reset vector write, keeping existing vector");
        }

        Self::with_reset_vector(memory)
    }

    /// Creates a new CPU that starts wherever the bus's reset vector already points.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x34);
    /// mem.write(0xFFFD, 0x12);
    ///
    /// let cpu = CPU::with_reset_vector(mem);
    /// assert_eq!(cpu.pc(), 0x1234);
    /// ```
    pub fn with_reset_vector(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: RESET_SP,
            flags: StatusFlags::default(),
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Resets the register file and jumps through the reset vector.
    ///
    /// A, X and Y are zeroed, SP is set to 0xFF and PC is loaded from 0xFFFC/0xFFFD
    /// (little-endian). Status flags and memory are left as they are.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = RESET_SP;
        self.pc = self.memory.read_word(RESET_VECTOR);

        log::debug!("reset complete, pc = 0x{:04X}", self.pc);
    }

    /// Copies a program image to the load region and points the reset vector at it.
    ///
    /// Registers are not touched; call [`reset`](Self::reset) to start executing the image.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] without modifying memory if the image is larger
    /// than [`MAX_PROGRAM_SIZE`](crate::MAX_PROGRAM_SIZE).
    pub fn load_program(&mut self, program: &[u8]) -> Result<usize, LoadError> {
        memory::load_program(&mut self.memory, program)
    }

    /// Executes one instruction.
    ///
    /// Returns the opcode that was executed (0x00-0xFF) or [`INVALID_INSTRUCTION`] (0x7FFF)
    /// when the byte at PC is not an executable instruction.
    ///
    /// An invalid byte leaves every register, flag and memory byte unchanged, PC included.
    /// The core never skips it on its own: a caller that ignores the sentinel and steps again
    /// without moving PC will see the same result forever. Use [`execute`](Self::execute)
    /// for a `Result` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus, INVALID_INSTRUCTION};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.memory_mut().write(0x8000, 0xEA); // NOP
    /// cpu.memory_mut().write(0x8001, 0x02); // illegal
    ///
    /// assert_eq!(cpu.step(), 0xEA);
    /// assert_eq!(cpu.step(), INVALID_INSTRUCTION);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> u16 {
        match self.execute() {
            Ok(opcode) => opcode as u16,
            Err(_) => INVALID_INSTRUCTION,
        }
    }

    /// Executes one instruction, reporting illegal opcodes as an error.
    ///
    /// Same transition as [`step`](Self::step).
    ///
    /// # Errors
    ///
    /// [`ExecutionError::IllegalOpcode`] if the byte at PC is illegal or names an instruction
    /// this core does not execute (BRK). No state is modified in that case.
    pub fn execute(&mut self) -> Result<u8, ExecutionError> {
        let pc = self.pc;
        let opcode = self.memory.read(pc);
        let metadata = lookup(opcode);

        if !metadata.is_executable() {
            log::warn!(
                "illegal opcode 0x{:02X} ({}) at 0x{:04X}",
                opcode,
                metadata.mnemonic,
                pc
            );
            return Err(ExecutionError::IllegalOpcode { opcode, pc });
        }

        let ctx = self.resolve(metadata.addressing_mode);

        log::trace!(
            "0x{:04X}  {:02X}  {} {:?} {:?}",
            pc,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode,
            ctx
        );

        instructions::execute(self, metadata, &ctx)?;

        if !metadata.manages_pc {
            self.pc = self.pc.wrapping_add(metadata.size_bytes() as u16);
        }

        Ok(opcode)
    }

    /// Runs up to `budget` instructions.
    ///
    /// # Returns
    ///
    /// - `Ok(executed)` once the budget is spent
    /// - `Err(ExecutionError)` as soon as an illegal opcode is fetched
    pub fn run_for_instructions(&mut self, budget: usize) -> Result<usize, ExecutionError> {
        for _ in 0..budget {
            self.execute()?;
        }

        Ok(budget)
    }

    /// Runs until `stop` accepts an executed opcode, `budget` instructions have run, or an
    /// illegal opcode is fetched.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    /// use cpu6502::cpu::RunOutcome;
    ///
    /// // LDX #$03, DEX, BNE -3, NOP
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load_program(&[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0xEA]).unwrap();
    /// cpu.reset();
    ///
    /// let summary = cpu.run_until(100, |opcode| opcode == 0xEA);
    /// assert_eq!(summary.outcome, RunOutcome::Stopped);
    /// assert_eq!(summary.instructions, 8);
    /// assert_eq!(cpu.x(), 0);
    /// ```
    pub fn run_until<F>(&mut self, budget: usize, mut stop: F) -> RunSummary
    where
        F: FnMut(u8) -> bool,
    {
        let mut summary = RunSummary {
            instructions: 0,
            last_opcode: None,
            outcome: RunOutcome::BudgetExhausted,
        };

        while summary.instructions < budget {
            match self.execute() {
                Ok(opcode) => {
                    summary.instructions += 1;
                    summary.last_opcode = Some(opcode);
                    if stop(opcode) {
                        summary.outcome = RunOutcome::Stopped;
                        break;
                    }
                }
                Err(err) => {
                    summary.outcome = RunOutcome::Halted(err);
                    break;
                }
            }
        }

        summary
    }

    // ========== Stack ==========

    /// Pushes a byte: write at 0x0100 | SP, then decrement SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte: increment SP (wrapping), then read at 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 | SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.flags.to_byte()
    }

    /// Returns the status flags.
    pub fn flags(&self) -> StatusFlags {
        self.flags
    }

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            flags: self.flags,
        }
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flags.negative
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flags.overflow
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flags.break_command
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flags.decimal
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flags.interrupt_disable
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flags.zero
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flags.carry
    }

    // ========== Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter, e.g. to step past an illegal opcode.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Unpacks a status byte into the flags.
    pub fn set_status(&mut self, value: u8) {
        self.flags = StatusFlags::from_byte(value);
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flags.negative = value;
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flags.overflow = value;
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flags.break_command = value;
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flags.decimal = value;
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flags.interrupt_disable = value;
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flags.zero = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flags.carry = value;
    }
}
