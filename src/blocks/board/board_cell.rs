use crate::blocks::prelude::*;

/// A cell on the board.
/// bits:
///     [00, 01]: colour value
///     [02, 02]: occupied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardCell(u8);

impl BoardCell {
    const COLOR_VALUE_OFFSET: usize = 0x00;
    const COLOR_VALUE_EXTENT: usize = 0b11; // B Y R G
    const COLOR_PRESENCE_OFFSET: usize = 0x02;
    const COLOR_PRESENCE_EXTENT: usize = 0b01; // Some None

    /// Determines whether or not a piece covers this cell.
    pub fn covered(&self) -> bool {
        let v = self._extract(
            BoardCell::COLOR_PRESENCE_OFFSET,
            BoardCell::COLOR_PRESENCE_EXTENT,
        );
        v == 1
    }

    /// Determines the colour occupying this cell, if any.
    pub fn color(&self) -> Option<Color> {
        if self.covered() {
            let v = self._extract(BoardCell::COLOR_VALUE_OFFSET, BoardCell::COLOR_VALUE_EXTENT);
            Some(Color::from(v))
        } else {
            None
        }
    }

    /// Produces a new board cell with the given colour.
    pub fn with_color(&self, color: Option<Color>) -> BoardCell {
        if let Some(value) = color {
            self._with(
                BoardCell::COLOR_PRESENCE_OFFSET,
                BoardCell::COLOR_PRESENCE_EXTENT,
                1,
            )
            ._with(
                BoardCell::COLOR_VALUE_OFFSET,
                BoardCell::COLOR_VALUE_EXTENT,
                value as u8,
            )
        } else {
            BoardCell::default()
        }
    }

    /// Produces the value stored in the bits corresponding to a given offset and extent.
    fn _extract(&self, offset: usize, extent: usize) -> u8 {
        (self.0 >> offset) & extent as u8
    }

    /// Produces a new BoardCell with the given value placed into the bits corresponding to the given offset and extent.
    fn _with(&self, offset: usize, extent: usize, value: u8) -> BoardCell {
        let mask: u8 = (extent << offset) as u8;
        let antimask = !mask;
        let v = (value << offset) & mask;
        BoardCell((self.0 & antimask) | v) // mask out the value being replaced, then include the shifted bits of the new value
    }
}

impl std::fmt::Display for BoardCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color().map_or('.', |c| c.glyph()))
    }
}
