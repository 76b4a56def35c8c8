//! Odin32K bus: address decoding and cycle charging.
//!
//! The 16-bit address space is decoded on the top nibble:
//!
//! | Range       | Device              | Access                          |
//! |-------------|---------------------|---------------------------------|
//! | $0000-$7FFF | System RAM (32 KiB) | R/W                             |
//! | $8000-$8FFF | I/O controller slot | inert: reads $00, writes dropped|
//! | $9000-$9FFF | Serial 0 slot       | inert                           |
//! | $A000-$AFFF | Serial 1 slot       | inert                           |
//! | $B000-$BFFF | Unmapped            | floating $FF, writes dropped    |
//! | $C000-$DFFF | ROM1 (8 KiB)        | R only, mirrored on low 13 bits |
//! | $E000-$FFFF | ROM0 (8 KiB)        | R only                          |
//!
//! Every `read` and `write` charges exactly one cycle on the pacer before
//! it completes, whatever the target region: a store into ROM mutates
//! nothing but still costs its cycle. Purely internal CPU cycles arrive
//! through `tick`.

use emu_core::Bus;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::clock::Pacer;
use crate::config::Odin32kConfig;

/// System RAM size: 32 KiB at $0000-$7FFF.
pub const RAM_SIZE: usize = 0x8000;

/// ROM bank size: 8 KiB each.
pub const ROM_SIZE: usize = 0x2000;

/// Value read from the inert device slots ($8000-$AFFF).
const SLOT_VALUE: u8 = 0x00;

/// Floating-bus value for the unmapped $B000-$BFFF page (pulled high).
const FLOATING: u8 = 0xFF;

/// The Odin32K bus, implementing `emu_core::Bus`.
///
/// Owns RAM, both ROM banks and the pacer. The CPU accesses everything
/// through the `Bus` trait; ROM contents are immutable after construction.
pub struct Odin32kBus {
    ram: Box<[u8; RAM_SIZE]>,
    rom0: Box<[u8; ROM_SIZE]>,
    rom1: Box<[u8; ROM_SIZE]>,
    pacer: Pacer,
}

impl Odin32kBus {
    /// Build the bus from a machine configuration.
    ///
    /// RAM powers on filled with a pseudo-random pattern so firmware cannot
    /// rely on zero-initialized memory; the pattern is deterministic for a
    /// given seed. ROM banks hold exactly the configured image bytes,
    /// zero-padded to the bank size.
    #[must_use]
    pub fn new(config: &Odin32kConfig) -> Self {
        let mut ram = Box::new([0u8; RAM_SIZE]);
        let seed = config.ram_seed.unwrap_or_else(clock_seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        rng.fill_bytes(ram.as_mut_slice());

        Self {
            ram,
            rom0: load_bank(&config.rom0),
            rom1: load_bank(&config.rom1),
            pacer: Pacer::new(config.clock),
        }
    }

    /// Read memory without charging a cycle or emitting trace. Observation
    /// hook for the trace harness and tests only.
    #[must_use]
    pub fn peek(&self, addr: u16) -> u8 {
        self.decode_read(addr)
    }

    /// Total cycles charged on the pacer so far.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.pacer.cycles()
    }

    fn decode_read(&self, addr: u16) -> u8 {
        match addr >> 12 {
            0x0..=0x7 => self.ram[addr as usize],
            0x8 => SLOT_VALUE,       // I/O controller slot
            0x9 => SLOT_VALUE,       // Serial 0 slot
            0xA => SLOT_VALUE,       // Serial 1 slot
            0xB => FLOATING,         // unmapped
            0xC | 0xD => self.rom1[(addr & 0x1FFF) as usize],
            _ => self.rom0[(addr & 0x1FFF) as usize],
        }
    }
}

impl Bus for Odin32kBus {
    fn read(&mut self, address: u16) -> u8 {
        self.pacer.wait_for_cycles(1);
        let value = self.decode_read(address);
        #[cfg(feature = "trace")]
        println!("R ${address:04X} = ${value:02X}");
        value
    }

    fn write(&mut self, address: u16, value: u8) {
        self.pacer.wait_for_cycles(1);
        #[cfg(feature = "trace")]
        println!("W ${address:04X} = ${value:02X}");
        if address >> 12 <= 0x7 {
            self.ram[address as usize] = value;
        }
        // ROM banks, device slots and the unmapped page drop writes; the
        // cycle has already been charged.
    }

    fn tick(&mut self, cycles: u32) {
        self.pacer.wait_for_cycles(u64::from(cycles));
    }
}

/// Copy an image into an 8 KiB bank, zero-padding or truncating.
fn load_bank(image: &[u8]) -> Box<[u8; ROM_SIZE]> {
    let mut bank = Box::new([0u8; ROM_SIZE]);
    let len = image.len().min(ROM_SIZE);
    bank[..len].copy_from_slice(&image[..len]);
    bank
}

/// Seed drawn from the clock when the configuration does not fix one.
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0x6502, |d| d.as_nanos() as u64)
}
