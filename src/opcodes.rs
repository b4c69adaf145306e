//! Bit-exact opcode values and the addressing modes they decode to. The hex
//! values here are a hard data contract, not an implementation detail.

/// The addressing modes this core resolves. Implied-addressing opcodes
/// (stack ops, TSX/TXS) take no operand byte at all, so they bypass this
/// enum entirely and bill their dummy-read/internal cycle directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    IndirectX,
    IndirectY,
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    LDA_IM = 0xA9,
    LDA_ZP = 0xA5,
    LDA_ZPX = 0xB5,
    LDA_ABS = 0xAD,
    LDA_ABSX = 0xBD,
    LDA_ABSY = 0xB9,
    LDA_XIND = 0xA1,
    LDA_INDY = 0xB1,

    LDX_IM = 0xA2,
    LDX_ZP = 0xA6,
    LDX_ZPY = 0xB6,
    LDX_ABS = 0xAE,
    LDX_ABSY = 0xBE,

    LDY_IM = 0xA0,
    LDY_ZP = 0xA4,
    LDY_ZPX = 0xB4,
    LDY_ABS = 0xAC,
    LDY_ABSX = 0xBC,

    STA_ZP = 0x85,
    STA_ZPX = 0x95,
    STA_ABS = 0x8D,
    STA_ABSX = 0x9D,
    STA_ABSY = 0x99,
    STA_XIND = 0x81,
    STA_INDY = 0x91,

    STX_ZP = 0x86,
    STX_ZPY = 0x96,
    STX_ABS = 0x8E,

    STY_ZP = 0x84,
    STY_ZPX = 0x94,
    STY_ABS = 0x8C,

    AND_IM = 0x29,
    AND_ZP = 0x25,
    AND_ZPX = 0x35,
    AND_ABS = 0x2D,
    AND_ABSX = 0x3D,
    AND_ABSY = 0x39,
    AND_XIND = 0x21,
    AND_INDY = 0x31,

    ORA_IM = 0x09,
    ORA_ZP = 0x05,
    ORA_ZPX = 0x15,
    ORA_ABS = 0x0D,
    ORA_ABSX = 0x1D,
    ORA_ABSY = 0x19,
    ORA_XIND = 0x01,
    ORA_INDY = 0x11,

    EOR_IM = 0x49,
    EOR_ZP = 0x45,
    EOR_ZPX = 0x55,
    EOR_ABS = 0x4D,
    EOR_ABSX = 0x5D,
    EOR_ABSY = 0x59,
    EOR_XIND = 0x41,
    EOR_INDY = 0x51,

    JSR = 0x20,
    RTS = 0x60,
    JMP_ABS = 0x4C,
    JMP_IND = 0x6C,

    PHA = 0x48,
    PHP = 0x08,
    PLA = 0x68,
    PLP = 0x28,
    TSX = 0xBA,
    TXS = 0x9A,
}

impl OpCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decodes a raw opcode byte. `None` means unknown — the dispatcher
    /// halts without billing anything beyond the opcode fetch already
    /// charged to read this byte.
    pub fn decode(byte: u8) -> Option<OpCode> {
        use OpCode::*;
        Some(match byte {
            0xA9 => LDA_IM,
            0xA5 => LDA_ZP,
            0xB5 => LDA_ZPX,
            0xAD => LDA_ABS,
            0xBD => LDA_ABSX,
            0xB9 => LDA_ABSY,
            0xA1 => LDA_XIND,
            0xB1 => LDA_INDY,

            0xA2 => LDX_IM,
            0xA6 => LDX_ZP,
            0xB6 => LDX_ZPY,
            0xAE => LDX_ABS,
            0xBE => LDX_ABSY,

            0xA0 => LDY_IM,
            0xA4 => LDY_ZP,
            0xB4 => LDY_ZPX,
            0xAC => LDY_ABS,
            0xBC => LDY_ABSX,

            0x85 => STA_ZP,
            0x95 => STA_ZPX,
            0x8D => STA_ABS,
            0x9D => STA_ABSX,
            0x99 => STA_ABSY,
            0x81 => STA_XIND,
            0x91 => STA_INDY,

            0x86 => STX_ZP,
            0x96 => STX_ZPY,
            0x8E => STX_ABS,

            0x84 => STY_ZP,
            0x94 => STY_ZPX,
            0x8C => STY_ABS,

            0x29 => AND_IM,
            0x25 => AND_ZP,
            0x35 => AND_ZPX,
            0x2D => AND_ABS,
            0x3D => AND_ABSX,
            0x39 => AND_ABSY,
            0x21 => AND_XIND,
            0x31 => AND_INDY,

            0x09 => ORA_IM,
            0x05 => ORA_ZP,
            0x15 => ORA_ZPX,
            0x0D => ORA_ABS,
            0x1D => ORA_ABSX,
            0x19 => ORA_ABSY,
            0x01 => ORA_XIND,
            0x11 => ORA_INDY,

            0x49 => EOR_IM,
            0x45 => EOR_ZP,
            0x55 => EOR_ZPX,
            0x4D => EOR_ABS,
            0x5D => EOR_ABSX,
            0x59 => EOR_ABSY,
            0x41 => EOR_XIND,
            0x51 => EOR_INDY,

            0x20 => JSR,
            0x60 => RTS,
            0x4C => JMP_ABS,
            0x6C => JMP_IND,

            0x48 => PHA,
            0x08 => PHP,
            0x68 => PLA,
            0x28 => PLP,
            0xBA => TSX,
            0x9A => TXS,

            _ => return None,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_round_trips_every_listed_opcode() {
        let listed = [
            OpCode::LDA_IM,
            OpCode::LDA_ZP,
            OpCode::LDA_ZPX,
            OpCode::LDA_ABS,
            OpCode::LDA_ABSX,
            OpCode::LDA_ABSY,
            OpCode::LDA_XIND,
            OpCode::LDA_INDY,
            OpCode::JSR,
            OpCode::RTS,
            OpCode::JMP_ABS,
            OpCode::JMP_IND,
            OpCode::PHA,
            OpCode::PHP,
            OpCode::PLA,
            OpCode::PLP,
            OpCode::TSX,
            OpCode::TXS,
        ];
        for op in listed {
            assert_eq!(OpCode::decode(op.as_u8()), Some(op));
        }
    }

    #[test]
    fn unknown_byte_decodes_to_none() {
        assert_eq!(OpCode::decode(0x02), None);
        assert_eq!(OpCode::decode(0xFF), None);
    }
}
