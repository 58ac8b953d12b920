use crate::blocks::prelude::*;

pub const BOARD_SIZE: usize = 20;
pub const NUM_COLORS: usize = 4;
pub const NUM_PIECES: usize = 21;

/// Bonus for placing every piece.
pub const ALL_PLACED_BONUS: i32 = 15;

/// Bonus for placing every piece with the single square last.
pub const MONOMINO_LAST_BONUS: i32 = 20;

// A player colour.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Blue = 0,
    Yellow = 1,
    Red = 2,
    Green = 3,
}

impl Color {
    /// Gets the colours in turn order.
    pub fn all() -> [Color; NUM_COLORS] {
        [Color::Blue, Color::Yellow, Color::Red, Color::Green]
    }

    /// The home corner the colour's first piece must cover.
    pub fn corner(&self) -> Coord {
        let far = BOARD_SIZE - 1;
        match self {
            Color::Blue   => Coord::new(0, 0),
            Color::Yellow => Coord::new(far, 0),
            Color::Red    => Coord::new(0, far),
            Color::Green  => Coord::new(far, far),
        }
    }

    /// Notates the colour.
    pub fn notate(&self) -> String {
        match self {
            Color::Blue   => "Blue",
            Color::Yellow => "Yellow",
            Color::Red    => "Red",
            Color::Green  => "Green",
        }.into()
    }

    /// The single-character glyph used on printed boards.
    pub fn glyph(&self) -> char {
        match self {
            Color::Blue   => 'B',
            Color::Yellow => 'Y',
            Color::Red    => 'R',
            Color::Green  => 'G',
        }
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        match value {
            0 => Color::Blue,
            1 => Color::Yellow,
            2 => Color::Red,
            3 => Color::Green,
            _ => panic!("expected Color of 0-3, received {value}"),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

// A piece identifier; the discriminant is the piece's index in the catalog.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceId {
    P1 = 0,
    P2 = 1,
    P3 = 2,
    P4 = 3,
    P5 = 4,
    P6 = 5,
    P7 = 6,
    P8 = 7,
    P9 = 8,
    P10 = 9,
    P11 = 10,
    P12 = 11,
    P13 = 12,
    P14 = 13,
    P15 = 14,
    P16 = 15,
    P17 = 16,
    P18 = 17,
    P19 = 18,
    P20 = 19,
    P21 = 20,
}

impl PieceId {
    /// Gets the piece ids in catalog order.
    pub fn all() -> [PieceId; NUM_PIECES] {
        use PieceId::*;
        [
            P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11,
            P12, P13, P14, P15, P16, P17, P18, P19, P20, P21,
        ]
    }

    /// The index of the piece in the catalog.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Looks up a piece by catalog index.
    pub fn try_from_index(index: usize) -> Result<PieceId> {
        PieceId::all()
            .get(index)
            .copied()
            .ok_or_else(|| anyhow!("piece index {index} out of range"))
    }

    /// Notates the piece, e.g. `P12`.
    pub fn notate(&self) -> String {
        format!("P{}", self.index() + 1)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}
