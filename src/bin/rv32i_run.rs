//! Reference host driver: load a flat binary image into ROM and run
//! it with [`rv32i_core::Cpu::step`] until a fault or step limit.
//!
//! This binary is a demonstration of the public `Cpu` API, not part
//! of the core library; a host embedding the crate is free to drive
//! `step()` its own way.

use std::io::{self, Read, Write};

use clap::Parser;
use clap_num::maybe_hex;
use log::{error, info, trace};

use rv32i_core::Cpu;

/// Run a flat RV32I binary image.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// Path to a flat binary instruction image, loaded at ROM base (0x0)
    input: String,

    /// Override the entry program counter (use 0x prefix for hex)
    #[arg(short, long, value_parser=maybe_hex::<u32>)]
    entry_pc: Option<u32>,

    /// Single-step, tracing each instruction's pc and press-enter to continue
    #[arg(short, long)]
    debug: bool,

    /// Start single-stepping once this pc is reached (0x prefix for hex)
    #[arg(short, long, value_parser=maybe_hex::<u32>)]
    pc_breakpoint: Option<u32>,

    /// Stop after this many instructions even if no fault occurred
    #[arg(short = 'n', long)]
    max_steps: Option<u64>,

    /// Fill registers and RAM with reproducible pseudo-random garbage
    /// at startup instead of zeroing them (use 0x prefix for hex)
    #[arg(short, long, value_parser=maybe_hex::<u64>)]
    randomize_seed: Option<u64>,

    /// Print the 8-word memory region starting at this address at
    /// each traced step (0x prefix for hex)
    #[arg(short, long, value_parser=maybe_hex::<u32>)]
    memory: Option<u32>,
}

fn press_enter_to_continue() {
    let mut stdout = io::stdout();
    write!(stdout, "Press enter to continue...").unwrap();
    stdout.flush().unwrap();
    let _ = io::stdin().read(&mut [0u8]).unwrap();
}

fn print_memory(cpu: &Cpu, base: u32) {
    for n in 0..8 {
        let addr = base.wrapping_add(4 * n);
        match cpu.mem_read(addr, 4) {
            Ok(word) => println!("  {addr:08x}: {word:08x}"),
            Err(e) => println!("  {addr:08x}: <{e}>"),
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut cpu = match args.randomize_seed {
        Some(seed) => Cpu::new_randomized(seed),
        None => Cpu::new(),
    };

    if let Err(e) = rv32i_core::loader::load_file(&mut cpu, &args.input) {
        error!("failed to load {}: {e}", args.input);
        std::process::exit(1);
    }

    if let Some(entry) = args.entry_pc {
        cpu.set_pc(entry);
    }

    info!("starting execution at pc=0x{:08x}", cpu.pc());

    let mut tracing = args.debug;
    let mut steps: u64 = 0;

    loop {
        if let Some(limit) = args.max_steps {
            if steps >= limit {
                info!("stopped after {steps} instructions (--max-steps reached)");
                break;
            }
        }

        if let Some(bp) = args.pc_breakpoint {
            if cpu.pc() == bp {
                tracing = true;
            }
        }

        if tracing {
            trace!("pc=0x{:08x}", cpu.pc());
        }

        match cpu.step() {
            Ok(()) => {
                steps += 1;
            }
            Err(fault) => {
                error!("{fault} (after {steps} instructions)");
                std::process::exit(1);
            }
        }

        if tracing {
            if let Some(base) = args.memory {
                print_memory(&cpu, base);
            }
            press_enter_to_continue();
        }
    }
}
