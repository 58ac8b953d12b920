pub(crate) mod board_cell;
pub(crate) mod indexing;
pub(crate) mod moves;
pub(crate) mod placement;
pub(crate) mod pretty;

use super::prelude::*;

use board_cell::BoardCell;
pub use moves::LegalMove;

/// The grid of cells on the board, indexed `[y][x]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grid(pub [[BoardCell; BOARD_SIZE]; BOARD_SIZE]);

/// The 20x20 board. Only accepted placements write to it.
#[derive(Clone, Debug, Default)]
pub struct Board {
    /// A grid of squares on the board, each empty or owned by one colour.
    cells: Grid,

    /// The number of cells each colour covers, so coverage queries skip the grid scan.
    coverage: [usize; NUM_COLORS],
}

impl Board {
    /// Returns a new, empty board.
    pub fn new() -> Board {
        Board::default()
    }

    /// Determines the colour at the given coordinate, if any.
    pub fn cell(&self, coord: &Coord) -> Result<Option<Color>> {
        self.get(coord).map(|v: BoardCell| v.color())
    }

    /// The number of cells the given colour covers.
    pub fn coverage(&self, color: Color) -> usize {
        self.coverage[color as usize]
    }

    /// Whether no piece has been placed yet.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.coverage.iter().all(|&n| n == 0)
    }

    /// Sets the colour at the given coordinate.
    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, coord: &Coord, color: Option<Color>) -> Result<&mut Self> {
        self.get(coord)?;
        Ok(self.set_cell_unchecked(coord, color))
    }
}
