//! # Judecca Opcode Definitions
//!
//! Every nibble (0x0-0xF) is a valid instruction, so decoding is total.
//!
//! ## Opcode Encoding
//!
//! - 0x0-0x3: Cell and head (INC, DEC, LEFT, RIGHT)
//! - 0x4-0x5: Loop brackets (OPEN, CLOSE)
//! - 0x6-0x7: I/O (OUT, IN)
//! - 0x8-0x9: Debug hook and context-sensitive bracket (BREAK, PIVOT)
//! - 0xA-0xF: Reserved, currently no-ops

use serde::{Deserialize, Serialize};

/// Instruction opcode (4 bits, values 0x0-0xF)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== Cell and head (0x0-0x3) ==========
    /// `+`: increment head cell, wrapping
    Inc = 0x0,
    /// `-`: decrement head cell, wrapping
    Dec = 0x1,
    /// `<`: move head left
    Left = 0x2,
    /// `>`: move head right
    Right = 0x3,

    // ========== Brackets (0x4-0x5) ==========
    /// `[`: jump past the matching `]` if the head cell is zero
    Open = 0x4,
    /// `]`: jump back behind the matching `[` if the head cell is non-zero
    Close = 0x5,

    // ========== I/O (0x6-0x7) ==========
    /// `.`: write head cell
    Out = 0x6,
    /// `,`: read one byte into head cell
    In = 0x7,

    // ========== Extensions (0x8-0x9) ==========
    /// `$`: implementation-defined breakpoint, otherwise a no-op
    Break = 0x8,
    /// `|`: `]` while a loop is pending, `[` otherwise
    Pivot = 0x9,

    // ========== Reserved (0xA-0xF) ==========
    /// `%`: no-op, reserved for a future syscall extension
    Nop = 0xA,
    /// `_`: reserved no-op
    ReservedB = 0xB,
    /// `_`: reserved no-op
    ReservedC = 0xC,
    /// `_`: reserved no-op
    ReservedD = 0xD,
    /// `_`: reserved no-op
    ReservedE = 0xE,
    /// `_`: reserved no-op
    ReservedF = 0xF,
}

impl Opcode {
    /// Opcode mask (0xF for 4 bits)
    pub const MASK: u8 = 0xF;

    /// All opcodes in nibble order
    pub const ALL: [Opcode; 16] = [
        Opcode::Inc,
        Opcode::Dec,
        Opcode::Left,
        Opcode::Right,
        Opcode::Open,
        Opcode::Close,
        Opcode::Out,
        Opcode::In,
        Opcode::Break,
        Opcode::Pivot,
        Opcode::Nop,
        Opcode::ReservedB,
        Opcode::ReservedC,
        Opcode::ReservedD,
        Opcode::ReservedE,
        Opcode::ReservedF,
    ];

    /// Decode the low nibble of `value`. Upper bits are ignored.
    #[inline]
    pub const fn from_nibble(value: u8) -> Self {
        match value & Self::MASK {
            0x0 => Opcode::Inc,
            0x1 => Opcode::Dec,
            0x2 => Opcode::Left,
            0x3 => Opcode::Right,
            0x4 => Opcode::Open,
            0x5 => Opcode::Close,
            0x6 => Opcode::Out,
            0x7 => Opcode::In,
            0x8 => Opcode::Break,
            0x9 => Opcode::Pivot,
            0xA => Opcode::Nop,
            0xB => Opcode::ReservedB,
            0xC => Opcode::ReservedC,
            0xD => Opcode::ReservedD,
            0xE => Opcode::ReservedE,
            _ => Opcode::ReservedF,
        }
    }

    /// Convert to nibble value
    #[inline]
    pub const fn to_nibble(self) -> u8 {
        self as u8
    }

    /// Brackets are resolved through the jump table instead of advancing by one
    #[inline]
    pub const fn is_bracket(self) -> bool {
        matches!(self, Opcode::Open | Opcode::Close | Opcode::Pivot)
    }

    /// Instructions without any effect on tape, I/O or control flow
    #[inline]
    pub const fn is_nop(self) -> bool {
        matches!(
            self,
            Opcode::Nop
                | Opcode::ReservedB
                | Opcode::ReservedC
                | Opcode::ReservedD
                | Opcode::ReservedE
                | Opcode::ReservedF
        )
    }

    /// Check if this opcode belongs to the reserved range
    #[inline]
    pub const fn is_reserved(self) -> bool {
        self.to_nibble() >= 0xA
    }

    /// Single-character symbol used in listings
    pub const fn symbol(self) -> char {
        match self {
            Opcode::Inc => '+',
            Opcode::Dec => '-',
            Opcode::Left => '<',
            Opcode::Right => '>',
            Opcode::Open => '[',
            Opcode::Close => ']',
            Opcode::Out => '.',
            Opcode::In => ',',
            Opcode::Break => '$',
            Opcode::Pivot => '|',
            Opcode::Nop => '%',
            Opcode::ReservedB
            | Opcode::ReservedC
            | Opcode::ReservedD
            | Opcode::ReservedE
            | Opcode::ReservedF => '_',
        }
    }

    /// Parse a listing symbol. `_` maps to the first reserved slot (0xB).
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Opcode::Inc),
            '-' => Some(Opcode::Dec),
            '<' => Some(Opcode::Left),
            '>' => Some(Opcode::Right),
            '[' => Some(Opcode::Open),
            ']' => Some(Opcode::Close),
            '.' => Some(Opcode::Out),
            ',' => Some(Opcode::In),
            '$' => Some(Opcode::Break),
            '|' => Some(Opcode::Pivot),
            '%' => Some(Opcode::Nop),
            '_' => Some(Opcode::ReservedB),
            _ => None,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Opcode::Inc => "inc",
            Opcode::Dec => "dec",
            Opcode::Left => "left",
            Opcode::Right => "right",
            Opcode::Open => "open",
            Opcode::Close => "close",
            Opcode::Out => "out",
            Opcode::In => "in",
            Opcode::Break => "break",
            Opcode::Pivot => "pivot",
            Opcode::Nop => "nop",
            Opcode::ReservedB
            | Opcode::ReservedC
            | Opcode::ReservedD
            | Opcode::ReservedE
            | Opcode::ReservedF => "reserved",
        };
        write!(f, "{}", name)
    }
}
