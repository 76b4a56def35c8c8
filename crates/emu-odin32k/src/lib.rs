//! Cycle-accurate Odin32K single-board computer emulator.
//!
//! The Odin32K pairs a 65C02-family CPU with 32 KiB of RAM, two 8 KiB ROM
//! banks and reserved slots for an I/O controller and two serial ports.
//! Every bus access charges exactly one cycle against a wall-clock pacer,
//! so instruction timing falls out of the access sequence itself.

mod bus;
mod clock;
mod config;
mod odin32k;

pub use bus::{Odin32kBus, RAM_SIZE, ROM_SIZE};
pub use clock::Pacer;
pub use config::{CLOCK_HZ, DEBUG_CLOCK_HZ, Odin32kConfig};
pub use odin32k::Odin32k;
