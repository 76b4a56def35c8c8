//! End-to-end firmware scenarios.
//!
//! Each test boots the machine from a hand-assembled ROM0 image with the
//! reset vector at $E000 (unless stated), runs to the $02 halt sentinel and
//! observes registers, stack and cycle totals through the machine's
//! observation hooks.

use emu_core::MasterClock;
use emu_odin32k::{Odin32k, Odin32kConfig, ROM_SIZE};
use mos_65c02::flags;

fn rom0(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; ROM_SIZE];
    rom[..program.len()].copy_from_slice(program);
    // Reset vector → $E000
    rom[0x1FFC] = 0x00;
    rom[0x1FFD] = 0xE0;
    rom
}

fn boot(rom0: Vec<u8>) -> Odin32k {
    Odin32k::new(&Odin32kConfig {
        rom0,
        // Fast enough that the pacer never sleeps
        clock: MasterClock::new(1_000_000_000),
        ram_seed: Some(0x0D1),
        halt_opcode: Some(0x02),
        ..Odin32kConfig::default()
    })
}

#[test]
fn ldx_immediate_sets_zero_flag() {
    // LDX #$00; halt
    let mut machine = boot(rom0(&[0xA2, 0x00, 0x02]));
    let booted = machine.cycles();

    machine.run();

    let regs = &machine.cpu().regs;
    assert_eq!(regs.a, 0);
    assert_eq!(regs.x, 0);
    assert_eq!(regs.y, 0);
    assert!(regs.p.is_set(flags::Z));
    assert!(!regs.p.is_set(flags::N));
    assert!(regs.p.is_set(flags::U));
    // 2 cycles for LDX, 2 for the halt no-op
    assert_eq!(machine.cycles() - booted, 4);
}

#[test]
fn adc_sets_overflow_crossing_into_negative() {
    // LDA #$7F; ADC #$01; halt
    let mut machine = boot(rom0(&[0xA9, 0x7F, 0x69, 0x01, 0x02]));

    machine.run();

    let regs = &machine.cpu().regs;
    assert_eq!(regs.a, 0x80);
    assert!(regs.p.is_set(flags::N));
    assert!(regs.p.is_set(flags::V));
    assert!(!regs.p.is_set(flags::Z));
    assert!(!regs.p.is_set(flags::C));
}

#[test]
fn jsr_rts_round_trip() {
    // $E000: JSR $E008; LDA #$42; halt
    // $E008: LDA #$07; RTS
    let mut program = [0u8; 0x0B];
    program[..6].copy_from_slice(&[0x20, 0x08, 0xE0, 0xA9, 0x42, 0x02]);
    program[8..].copy_from_slice(&[0xA9, 0x07, 0x60]);
    let mut machine = boot(rom0(&program));
    let initial_sp = machine.cpu().regs.s;
    let booted = machine.cycles();

    machine.run();

    let regs = &machine.cpu().regs;
    assert_eq!(regs.a, 0x42);
    assert_eq!(regs.s, initial_sp, "SP returns to its initial value");
    assert_eq!(machine.pc(), 0xE007, "PC stops past the halt instruction");
    // JSR 6 + LDA 2 + RTS 6 + LDA 2 + halt 2
    assert_eq!(machine.cycles() - booted, 18);
}

#[test]
fn page_crossing_indexed_read_costs_an_extra_cycle() {
    // LDX #$01; LDA $10FF,X; halt (crosses into $1100)
    let mut machine = boot(rom0(&[0xA2, 0x01, 0xBD, 0xFF, 0x10, 0x02]));
    let booted = machine.cycles();
    machine.run();
    assert_eq!(machine.cycles() - booted, 2 + 5 + 2);

    // LDX #$01; LDA $1000,X; halt (stays on the page)
    let mut machine = boot(rom0(&[0xA2, 0x01, 0xBD, 0x00, 0x10, 0x02]));
    let booted = machine.cycles();
    machine.run();
    assert_eq!(machine.cycles() - booted, 2 + 4 + 2);
}

#[test]
fn php_plp_round_trips_p_through_the_stack() {
    // SEC; PHP; CLC; PLP; halt
    let mut machine = boot(rom0(&[0x38, 0x08, 0x18, 0x28, 0x02]));

    machine.run();

    let p = machine.cpu().regs.p;
    assert!(p.is_set(flags::C), "carry restored from the stack");
    assert!(p.is_set(flags::U), "bit 5 stays high");
    // PHP forced B onto the stacked byte, and PLP restored that byte
    assert!(p.is_set(flags::B));
}

#[test]
fn reset_vector_is_honored_wherever_it_points() {
    let mut rom = vec![0u8; ROM_SIZE];
    rom[0x1FFC] = 0x34;
    rom[0x1FFD] = 0x12;
    let mut machine = boot(rom);

    // $1234 is RAM per the map: the machine boots there and fetches
    // whatever the power-on pattern holds; every byte dispatches
    assert_eq!(machine.pc(), 0x1234);
    machine.step();
    assert_eq!(machine.instructions(), 1);
}
