//! Odin32K configuration.

use emu_core::MasterClock;

/// Production master clock: 4 MHz.
pub const CLOCK_HZ: u64 = 4_000_000;

/// Debug-build master clock, slow enough to watch a trace scroll by.
pub const DEBUG_CLOCK_HZ: u64 = 2;

/// Configuration for constructing an Odin32K instance.
pub struct Odin32kConfig {
    /// ROM0 image ($E000-$FFFF; its last four bytes hold the vectors).
    /// Up to 8 KiB; shorter images are zero-padded, longer ones truncated.
    pub rom0: Vec<u8>,
    /// ROM1 image ($C000-$DFFF). Same size rules; may be empty.
    pub rom1: Vec<u8>,
    /// Master clock the pacer runs against.
    pub clock: MasterClock,
    /// Seed for the power-on RAM pattern; drawn from the clock when `None`.
    pub ram_seed: Option<u64>,
    /// Opcode that stops the run loop once it has executed. `None` (the
    /// default) runs until the process is killed.
    pub halt_opcode: Option<u8>,
}

impl Default for Odin32kConfig {
    fn default() -> Self {
        let hz = if cfg!(debug_assertions) {
            DEBUG_CLOCK_HZ
        } else {
            CLOCK_HZ
        };
        Self {
            rom0: Vec::new(),
            rom1: Vec::new(),
            clock: MasterClock::new(hz),
            ram_seed: None,
            halt_opcode: None,
        }
    }
}
