use super::BoardCell;
use crate::blocks::prelude::*;

impl Board {
    /// Gets the board cell at a given coordinate.
    pub(super) fn get(&self, coord: &Coord) -> Result<BoardCell> {
        if coord.in_bounds() {
            Ok(self.cells.0[coord.y][coord.x])
        } else {
            Err(anyhow!(
                "invalid coordinate ({:02}, {:02})",
                coord.x,
                coord.y
            ))
        }
    }
}

impl Board {
    /// Unchecked colour in the grid; engine use only.
    pub(super) fn cell_unchecked(&self, coord: &Coord) -> Option<Color> {
        self.cells.0[coord.y][coord.x].color()
    }

    /// Whether the signed coordinate is on the board and owned by the colour. Off-board cells never are.
    pub(super) fn owned_by(&self, offset: &OffsetCoord, color: Color) -> bool {
        offset.on_board().is_some_and(|c| self.cell_unchecked(&c) == Some(color))
    }

    /// Unchecked setting of a cell in the grid; engine use only.
    pub(super) fn set_cell_unchecked(&mut self, coord: &Coord, color: Option<Color>) -> &mut Self {
        let prev = {
            let r = &mut self.cells.0[coord.y][coord.x];
            let prev = r.color();
            *r = r.with_color(color);
            prev
        };
        if let Some(p) = prev {
            self.coverage[p as usize] -= 1;
        }
        if let Some(c) = color {
            self.coverage[c as usize] += 1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::blocks::prelude::*;

    #[test]
    fn set_and_get() {
        let mut board = Board::new();
        assert!(board.is_empty());
        board.set_cell(&Coord::new(3, 4), Some(Color::Red)).unwrap();
        assert_eq!(board.cell(&Coord::new(3, 4)).unwrap(), Some(Color::Red));
        assert_eq!(board.cell(&Coord::new(4, 3)).unwrap(), None);
        assert_eq!(board.coverage(Color::Red), 1);

        board.set_cell(&Coord::new(3, 4), Some(Color::Blue)).unwrap();
        assert_eq!(board.coverage(Color::Red), 0);
        assert_eq!(board.coverage(Color::Blue), 1);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut board = Board::new();
        assert!(board.cell(&Coord::new(20, 0)).is_err());
        assert!(board.set_cell(&Coord::new(0, 20), Some(Color::Green)).is_err());
    }
}
