//! Top-level Odin32K system.
//!
//! A single execution thread owns the whole machine: CPU registers, RAM,
//! ROM banks and the pacer deadline. The only suspension point is the
//! pacer's sleep inside bus accesses. ROM contents are immutable after
//! boot and RAM changes only through the bus.

use emu_core::Cpu;
use mos_65c02::Mos65c02;

use crate::bus::Odin32kBus;
use crate::config::Odin32kConfig;

/// Odin32K system.
pub struct Odin32k {
    cpu: Mos65c02,
    bus: Odin32kBus,
    /// Opcode that ends `run()` once it has executed.
    halt_opcode: Option<u8>,
    /// Completed instruction counter.
    instructions: u64,
}

impl Odin32k {
    /// Create a new Odin32K from the given configuration and run the reset
    /// sequence: PC is loaded from the vector at $FFFC/$FFFD in ROM0.
    #[must_use]
    pub fn new(config: &Odin32kConfig) -> Self {
        let mut bus = Odin32kBus::new(config);
        let mut cpu = Mos65c02::new();
        cpu.reset(&mut bus);

        Self {
            cpu,
            bus,
            halt_opcode: config.halt_opcode,
            instructions: 0,
        }
    }

    /// Execute one instruction; returns its cycle count.
    pub fn step(&mut self) -> u32 {
        #[cfg(feature = "trace")]
        let (pc_before, opcode, lo, hi) = {
            let pc = self.cpu.regs.pc;
            (
                pc,
                self.bus.peek(pc),
                self.bus.peek(pc.wrapping_add(1)),
                self.bus.peek(pc.wrapping_add(2)),
            )
        };

        let cycles = self.cpu.step(&mut self.bus);
        self.instructions += 1;

        #[cfg(feature = "trace")]
        {
            let regs = &self.cpu.regs;
            println!(
                "{pc_before:04X}  {:<14} A={:02X} X={:02X} Y={:02X} S={:02X} P={:02X}",
                mos_65c02::disasm::disassemble(opcode, lo, hi),
                regs.a,
                regs.x,
                regs.y,
                regs.s,
                regs.p.to_byte(),
            );
            #[cfg(feature = "step")]
            wait_for_enter();
        }

        cycles
    }

    /// Run until the halt sentinel executes, or forever when none is set.
    ///
    /// The sentinel instruction still runs as its documented no-op class
    /// (charging its cycles, advancing PC) before the loop stops.
    pub fn run(&mut self) {
        loop {
            let opcode = self.bus.peek(self.cpu.regs.pc);
            self.step();
            if self.halt_opcode == Some(opcode) {
                return;
            }
        }
    }

    /// Current program counter.
    #[must_use]
    pub fn pc(&self) -> u16 {
        self.cpu.regs.pc
    }

    /// The CPU, for register observation.
    #[must_use]
    pub fn cpu(&self) -> &Mos65c02 {
        &self.cpu
    }

    /// The bus, for memory observation.
    #[must_use]
    pub fn bus(&self) -> &Odin32kBus {
        &self.bus
    }

    /// Total cycles charged since power-on (including the reset sequence).
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.bus.cycles()
    }

    /// Instructions completed since power-on.
    #[must_use]
    pub fn instructions(&self) -> u64 {
        self.instructions
    }
}

#[cfg(feature = "step")]
fn wait_for_enter() {
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}
