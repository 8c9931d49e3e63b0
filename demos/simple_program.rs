//! Simple program example
//!
//! Loads a small program image, then single-steps it while printing the
//! register file after every instruction, the way a front-end status
//! display would.
//!
//! The program multiplies 6 by 7 with repeated addition and stores the
//! product at $0010. The zero byte after it decodes as BRK, which this core
//! does not execute, so stepping ends with the 0x7FFF sentinel.

use cpu6502::{lookup, FlatMemory, MemoryBus, CPU, INVALID_INSTRUCTION};

/// LDX #$06; LDA #$00; CLC; loop: ADC #$07; DEX; BNE loop; STA $10
const PROGRAM: [u8; 12] = [
    0xA2, 0x06, 0xA9, 0x00, 0x18, 0x69, 0x07, 0xCA, 0xD0, 0xFB, 0x85, 0x10,
];

fn print_state(cpu: &CPU<FlatMemory>) {
    println!(
        "  A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} PC:{:04X}  NV-BDIZC: {:08b}",
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.pc(),
        cpu.status()
    );
}

fn main() {
    println!("6502 Core - Simple Program Example");
    println!("==================================\n");

    let mut cpu = CPU::new(FlatMemory::new());

    if let Err(e) = cpu.load_program(&PROGRAM) {
        eprintln!("Failed to load program: {}", e);
        return;
    }
    cpu.reset();

    println!("Loaded {} bytes at 0x{:04X}", PROGRAM.len(), cpu.pc());
    print_state(&cpu);
    println!();

    let mut step = 0;
    loop {
        let pc = cpu.pc();
        let opcode = cpu.memory().read(pc);
        let metadata = lookup(opcode);

        let result = cpu.step();
        if result == INVALID_INSTRUCTION {
            println!(
                "Stopped at 0x{:04X}: opcode 0x{:02X} ({}) is not executable",
                pc, opcode, metadata.mnemonic
            );
            break;
        }

        step += 1;
        println!(
            "Step {:2}: 0x{:04X}  {} ({})",
            step,
            pc,
            metadata.mnemonic,
            metadata.addressing_mode.name()
        );
        print_state(&cpu);
    }

    println!("\nProduct at $0010: {}", cpu.memory().read(0x0010));
}
