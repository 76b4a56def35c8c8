//! Instruction disassembly for trace output.
//!
//! Pure functions of the raw instruction bytes; nothing here touches CPU or
//! bus state. Opcodes outside the implemented set render as `NOP*` with the
//! operand bytes their no-op class consumes.

/// Operand formatting for an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Implied,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    IndexedIndirect,
    IndirectIndexed,
    ZpIndirect,
    Indirect,
    IndexedAbsoluteIndirect,
}

/// Mnemonic and addressing mode for an opcode byte.
#[rustfmt::skip]
fn opcode_info(opcode: u8) -> (&'static str, Mode) {
    use Mode::*;

    match opcode {
        0xA9 => ("LDA", Immediate),
        0xA5 => ("LDA", ZeroPage),
        0xB5 => ("LDA", ZeroPageX),
        0xAD => ("LDA", Absolute),
        0xBD => ("LDA", AbsoluteX),
        0xB9 => ("LDA", AbsoluteY),
        0xA1 => ("LDA", IndexedIndirect),
        0xB1 => ("LDA", IndirectIndexed),
        0xB2 => ("LDA", ZpIndirect),

        0xA2 => ("LDX", Immediate),
        0xA6 => ("LDX", ZeroPage),
        0xB6 => ("LDX", ZeroPageY),
        0xAE => ("LDX", Absolute),
        0xBE => ("LDX", AbsoluteY),

        0xA0 => ("LDY", Immediate),
        0xA4 => ("LDY", ZeroPage),
        0xB4 => ("LDY", ZeroPageX),
        0xAC => ("LDY", Absolute),
        0xBC => ("LDY", AbsoluteX),

        0x85 => ("STA", ZeroPage),
        0x95 => ("STA", ZeroPageX),
        0x8D => ("STA", Absolute),
        0x9D => ("STA", AbsoluteX),
        0x99 => ("STA", AbsoluteY),
        0x81 => ("STA", IndexedIndirect),
        0x91 => ("STA", IndirectIndexed),
        0x92 => ("STA", ZpIndirect),

        0x86 => ("STX", ZeroPage),
        0x96 => ("STX", ZeroPageY),
        0x8E => ("STX", Absolute),

        0x84 => ("STY", ZeroPage),
        0x94 => ("STY", ZeroPageX),
        0x8C => ("STY", Absolute),

        0xAA => ("TAX", Implied),
        0xA8 => ("TAY", Implied),
        0xBA => ("TSX", Implied),
        0x8A => ("TXA", Implied),
        0x9A => ("TXS", Implied),
        0x98 => ("TYA", Implied),

        0x48 => ("PHA", Implied),
        0x08 => ("PHP", Implied),
        0x68 => ("PLA", Implied),
        0x28 => ("PLP", Implied),

        0xE6 => ("INC", ZeroPage),
        0xF6 => ("INC", ZeroPageX),
        0xEE => ("INC", Absolute),
        0xFE => ("INC", AbsoluteX),
        0xC6 => ("DEC", ZeroPage),
        0xD6 => ("DEC", ZeroPageX),
        0xCE => ("DEC", Absolute),
        0xDE => ("DEC", AbsoluteX),
        0xE8 => ("INX", Implied),
        0xC8 => ("INY", Implied),
        0xCA => ("DEX", Implied),
        0x88 => ("DEY", Implied),

        0x69 => ("ADC", Immediate),
        0x65 => ("ADC", ZeroPage),
        0x75 => ("ADC", ZeroPageX),
        0x6D => ("ADC", Absolute),
        0x7D => ("ADC", AbsoluteX),
        0x79 => ("ADC", AbsoluteY),
        0x61 => ("ADC", IndexedIndirect),
        0x71 => ("ADC", IndirectIndexed),
        0x72 => ("ADC", ZpIndirect),

        0xE9 => ("SBC", Immediate),
        0xE5 => ("SBC", ZeroPage),
        0xF5 => ("SBC", ZeroPageX),
        0xED => ("SBC", Absolute),
        0xFD => ("SBC", AbsoluteX),
        0xF9 => ("SBC", AbsoluteY),
        0xE1 => ("SBC", IndexedIndirect),
        0xF1 => ("SBC", IndirectIndexed),
        0xF2 => ("SBC", ZpIndirect),

        0x18 => ("CLC", Implied),
        0x38 => ("SEC", Implied),
        0x58 => ("CLI", Implied),
        0x78 => ("SEI", Implied),
        0xB8 => ("CLV", Implied),
        0xD8 => ("CLD", Implied),
        0xF8 => ("SED", Implied),

        0x4C => ("JMP", Absolute),
        0x6C => ("JMP", Indirect),
        0x7C => ("JMP", IndexedAbsoluteIndirect),
        0x20 => ("JSR", Absolute),
        0x60 => ("RTS", Implied),
        0x00 => ("BRK", Implied),
        0x40 => ("RTI", Implied),
        0xEA => ("NOP", Implied),

        // Reserved opcodes, rendered with the operands their class consumes
        0x02 | 0x22 | 0x42 | 0x62 | 0x82 | 0xC2 | 0xE2 => ("NOP*", Immediate),
        0x44 => ("NOP*", ZeroPage),
        0x54 | 0xD4 | 0xF4 => ("NOP*", ZeroPageX),
        0xDC | 0xFC | 0x5C => ("NOP*", Absolute),
        _ => ("NOP*", Implied),
    }
}

/// Render one instruction as assembly text.
///
/// `lo` and `hi` are the bytes following the opcode; modes that take fewer
/// operand bytes ignore the rest.
#[must_use]
pub fn disassemble(opcode: u8, lo: u8, hi: u8) -> String {
    let (mnemonic, mode) = opcode_info(opcode);
    let word = u16::from_le_bytes([lo, hi]);

    match mode {
        Mode::Implied => mnemonic.to_string(),
        Mode::Immediate => format!("{mnemonic} #${lo:02X}"),
        Mode::ZeroPage => format!("{mnemonic} ${lo:02X}"),
        Mode::ZeroPageX => format!("{mnemonic} ${lo:02X},X"),
        Mode::ZeroPageY => format!("{mnemonic} ${lo:02X},Y"),
        Mode::Absolute => format!("{mnemonic} ${word:04X}"),
        Mode::AbsoluteX => format!("{mnemonic} ${word:04X},X"),
        Mode::AbsoluteY => format!("{mnemonic} ${word:04X},Y"),
        Mode::IndexedIndirect => format!("{mnemonic} (${lo:02X},X)"),
        Mode::IndirectIndexed => format!("{mnemonic} (${lo:02X}),Y"),
        Mode::ZpIndirect => format!("{mnemonic} (${lo:02X})"),
        Mode::Indirect => format!("{mnemonic} (${word:04X})"),
        Mode::IndexedAbsoluteIndirect => format!("{mnemonic} (${word:04X},X)"),
    }
}
