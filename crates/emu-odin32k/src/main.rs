//! Odin32K emulator binary.
//!
//! Boots a firmware image and runs until the process is killed. Build with
//! `--features trace` for an instruction/bus-access log, or `--features
//! step` to single-step on Enter.

use std::env;
use std::fs;
use std::process;

use emu_odin32k::{Odin32k, Odin32kConfig, ROM_SIZE};

fn main() {
    println!("Odin32K research emulator");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        println!("Usage: {} ROM0 [ROM1]", args[0]);
        process::exit(1);
    }

    let rom0 = load_rom(&args[1]);
    let rom1 = args.get(2).map_or_else(Vec::new, |path| load_rom(path));

    let config = Odin32kConfig {
        rom0,
        rom1,
        ..Odin32kConfig::default()
    };
    let mut machine = Odin32k::new(&config);
    println!("PC initialized at ${:04X}", machine.pc());

    machine.run();
}

/// Read a ROM image from disk, truncating to the 8 KiB bank size.
/// Exits with a diagnostic when the file cannot be read.
fn load_rom(path: &str) -> Vec<u8> {
    match fs::read(path) {
        Ok(mut data) => {
            data.truncate(ROM_SIZE);
            data
        }
        Err(e) => {
            eprintln!("Failed to read ROM file {path}: {e}");
            process::exit(1);
        }
    }
}
