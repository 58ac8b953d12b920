use crate::blocks::prelude::*;

/// The piece and orientation the colour to move is holding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub piece: PieceId,
    pub orientation: usize,
}

/// Which way to cycle through a piece's orientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl<'a> GameSession<'a> {
    /// Picks up an unused piece for the colour to move, starting at its first orientation.
    pub fn select_piece(&mut self, color: Color, piece: PieceId) -> std::result::Result<&'a [Shape], Rejection> {
        self._ensure_turn(color)?;
        if self.used(color).contains(&piece) {
            return Err(Rejection::PieceAlreadyUsed);
        }
        let catalog = self.catalog;
        self.selection = Some(Selection { piece, orientation: 0 });
        Ok(catalog.orientations(piece))
    }

    /// Steps to the next or previous orientation of the selected piece, wrapping around.
    pub fn cycle_orientation(&mut self, direction: Direction) -> std::result::Result<&'a Shape, Rejection> {
        let Some(Selection { piece, orientation }) = self.selection else {
            return Err(Rejection::NoPieceSelected);
        };
        let count = self.catalog.orientations(piece).len();
        let next = match direction {
            Direction::Next     => (orientation + 1) % count,
            Direction::Previous => (orientation + count - 1) % count,
        };
        self._reorient(piece, next)
    }

    /// Jumps to the orientation that is the horizontal mirror of the current one. If no orientation
    /// matches the mirror, steps to the next orientation instead.
    pub fn mirror_orientation(&mut self) -> std::result::Result<&'a Shape, Rejection> {
        let Some(Selection { piece, orientation }) = self.selection else {
            return Err(Rejection::NoPieceSelected);
        };
        let catalog = self.catalog;
        let orientations = catalog.orientations(piece);
        let target = orientations[orientation].reflect().normalize();
        let next = orientations
            .iter()
            .position(|o| *o == target)
            .unwrap_or((orientation + 1) % orientations.len());
        self._reorient(piece, next)
    }

    /// The current selection, if any.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The shape of the current selection, if any.
    pub fn selected_shape(&self) -> Option<&'a Shape> {
        let catalog = self.catalog;
        self.selection.map(|s| &catalog.orientations(s.piece)[s.orientation])
    }

    fn _reorient(&mut self, piece: PieceId, orientation: usize) -> std::result::Result<&'a Shape, Rejection> {
        let catalog = self.catalog;
        self.selection = Some(Selection { piece, orientation });
        Ok(&catalog.orientations(piece)[orientation])
    }
}
