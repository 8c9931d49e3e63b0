//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents, runs a few
//! instructions and checks the step contract: either an opcode was executed
//! or the sentinel was returned with nothing changed.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{lookup, FlatMemory, MemoryBus, CPU, INVALID_INSTRUCTION};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC byte
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program image loaded at 0x8000
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing (at 0x4000)
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = CPU::new(FlatMemory::new());

    if cpu.load_program(&input.memory.program).is_err() {
        return;
    }
    cpu.reset();

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        cpu.memory_mut().write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        cpu.memory_mut().write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.main_memory.iter().enumerate() {
        cpu.memory_mut().write(0x4000 + i as u16, byte);
    }

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for _ in 0..(input.steps % 32) {
        let before = cpu.registers();
        let opcode = cpu.memory().read(before.pc);
        let metadata = lookup(opcode);

        let result = cpu.step();

        if metadata.is_executable() {
            assert_eq!(result, opcode as u16);
            if !metadata.manages_pc {
                assert_eq!(
                    cpu.pc(),
                    before.pc.wrapping_add(metadata.size_bytes() as u16)
                );
            }
        } else {
            assert_eq!(result, INVALID_INSTRUCTION);
            assert_eq!(cpu.registers(), before);
            break;
        }
    }
});
