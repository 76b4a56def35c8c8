//! Wall-clock pacing for the emulated master clock.

use std::thread;
use std::time::{Duration, Instant};

use emu_core::MasterClock;

/// Paces emulated cycles against the host's monotonic clock.
///
/// The deadline for cycle `n` is derived from the total cycle count as
/// whole seconds plus a nanosecond remainder past the start instant, so
/// rounding never accumulates over long runs. When the caller is already
/// past the deadline the wait returns immediately and the target is not
/// pushed forward: catch-up execution compresses subsequent sleeps.
pub struct Pacer {
    start: Instant,
    frequency_hz: u64,
    cycles: u64,
}

impl Pacer {
    /// Create a pacer anchored at the current monotonic time.
    #[must_use]
    pub fn new(clock: MasterClock) -> Self {
        Self {
            start: Instant::now(),
            frequency_hz: clock.frequency_hz,
            cycles: 0,
        }
    }

    /// Charge `n` cycles and block until the wall clock reaches the
    /// cumulative deadline.
    pub fn wait_for_cycles(&mut self, n: u64) {
        self.cycles += n;
        let secs = self.cycles / self.frequency_hz;
        let nanos = (self.cycles % self.frequency_hz) * 1_000_000_000 / self.frequency_hz;
        let target = self.start + Duration::new(secs, nanos as u32);
        if let Some(remaining) = target.checked_duration_since(Instant::now()) {
            thread::sleep(remaining);
        }
    }

    /// Total cycles charged so far.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
