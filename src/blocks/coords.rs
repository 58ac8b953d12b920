use itertools::Itertools;

use crate::blocks::prelude::*;

/// Simple board coordinate; bounded to 20x20. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    /// Determines whether or not the coord is in bounds.
    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Constructs a new coord.
    pub fn new(x: usize, y: usize) -> Coord {
        Coord { x, y }
    }

    /// Every coordinate on the board, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).cartesian_product(0..BOARD_SIZE).map(|(y, x)| Coord { x, y })
    }

    /// The board label of the coord: a column letter and a 1-based row, e.g. `A1`.
    pub fn notate(&self) -> String {
        format!("{}{}", (b'A' + self.x as u8) as char, self.y + 1)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

/// Signed offset pair used for piece-local cells and neighbour arithmetic.
///
/// Fields are declared row first so the derived ordering sorts by `y`, then `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub y: isize,
    pub x: isize,
}

/// Offsets that turn a coordinate into one of its orthogonal neighbours.
pub static ORTHOGONAL_OFFSETS: [OffsetCoord; 4] = [
    OffsetCoord { x: -1, y: 0 },
    OffsetCoord { x: 1, y: 0 },
    OffsetCoord { x: 0, y: -1 },
    OffsetCoord { x: 0, y: 1 },
];

/// Offsets that turn a coordinate into one of its diagonal neighbours.
pub static DIAGONAL_OFFSETS: [OffsetCoord; 4] = [
    OffsetCoord { x: -1, y: -1 },
    OffsetCoord { x: 1, y: -1 },
    OffsetCoord { x: -1, y: 1 },
    OffsetCoord { x: 1, y: 1 },
];

impl OffsetCoord {
    /// Coerces the offset into a coordinate unchecked.
    pub fn coerce(&self) -> Coord {
        Coord {
            x: self.x as usize,
            y: self.y as usize,
        }
    }

    /// Coerces the offset into a coordinate if it lies on the board.
    pub fn on_board(&self) -> Option<Coord> {
        if self.in_bounds_signed() {
            Some(self.coerce())
        } else {
            None
        }
    }

    /// Determines whether or not the coord is in bounds.
    pub fn in_bounds_signed(&self) -> bool {
        0 <= self.x && self.x < BOARD_SIZE as isize && 0 <= self.y && self.y < BOARD_SIZE as isize
    }

    /// Constructs a new offset coord.
    pub fn new(x: isize, y: isize) -> OffsetCoord {
        OffsetCoord { x, y }
    }
}

// C -> OC

impl From<Coord> for OffsetCoord {
    fn from(value: Coord) -> Self {
        OffsetCoord {
            x: value.x as isize,
            y: value.y as isize,
        }
    }
}

impl From<&Coord> for OffsetCoord {
    fn from(value: &Coord) -> Self {
        OffsetCoord {
            x: value.x as isize,
            y: value.y as isize,
        }
    }
}

// OC + OC

impl Add<&OffsetCoord> for &OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add<OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}

// C + OC

impl Add<&OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &OffsetCoord::from(self) + rhs
    }
}

impl Add<&OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &self + rhs
    }
}

impl Add<OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}

// OC - OC

impl Sub<&OffsetCoord> for &OffsetCoord {
    type Output = OffsetCoord;
    fn sub(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Sub<OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn sub(self, rhs: OffsetCoord) -> Self::Output {
        &self - &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_sort_by_row_then_column() {
        let mut cells = vec![OffsetCoord::new(1, 0), OffsetCoord::new(0, 1), OffsetCoord::new(0, 0)];
        cells.sort();
        assert_eq!(cells, vec![OffsetCoord::new(0, 0), OffsetCoord::new(1, 0), OffsetCoord::new(0, 1)]);
    }

    #[test]
    fn on_board_rejects_negative_and_far_cells() {
        assert_eq!(OffsetCoord::new(3, 19).on_board(), Some(Coord::new(3, 19)));
        assert_eq!(OffsetCoord::new(-1, 0).on_board(), None);
        assert_eq!(OffsetCoord::new(0, 20).on_board(), None);
    }

    #[test]
    fn labels() {
        assert_eq!(Coord::new(0, 0).notate(), "A1");
        assert_eq!(Coord::new(19, 19).notate(), "T20");
        assert_eq!(Coord::new(4, 6).notate(), "E7");
        assert_eq!(Coord::all().count(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(Coord::all().take(2).collect::<Vec<_>>(), vec![Coord::new(0, 0), Coord::new(1, 0)]);
        assert_eq!(Coord::all().nth(BOARD_SIZE), Some(Coord::new(0, 1)));
    }
}
