use crate::blocks::prelude::*;

/// A legal placement: a piece, one of its orientations, and the board cell its local origin lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegalMove {
    pub piece: PieceId,
    pub orientation: usize,
    pub anchor: Coord,
}

impl LegalMove {
    /// The canonical move string, e.g. `P12:3@E7`.
    pub fn notate(&self) -> String {
        format!("{}:{}@{}", self.piece.notate(), self.orientation, self.anchor.notate())
    }
}

impl Board {
    /// Covers the given cells with a colour; engine use only, so the cells must already be validated.
    pub(crate) fn place_unchecked(&mut self, color: Color, cells: &[Coord]) -> &mut Self {
        cells.iter().for_each(|c| {
            self.set_cell_unchecked(c, Some(color));
        });
        self
    }

    /// Determines whether the colour has any legal placement among its unused pieces.
    ///
    /// Tries every unused piece, every orientation and every anchor on the board, stopping at the
    /// first placement the validator accepts.
    pub fn has_legal_move(
        &self,
        catalog: &PieceCatalog,
        color: Color,
        used: PieceSet,
        first_move_completed: bool,
    ) -> bool {
        self._legal_moves_lazy(catalog, color, used, first_move_completed).next().is_some()
    }

    /// Enumerates every legal placement of the colour's unused pieces, in catalog order.
    pub fn legal_moves(
        &self,
        catalog: &PieceCatalog,
        color: Color,
        used: PieceSet,
        first_move_completed: bool,
    ) -> Vec<LegalMove> {
        self._legal_moves_lazy(catalog, color, used, first_move_completed).collect()
    }

    fn _legal_moves_lazy<'a>(
        &'a self,
        catalog: &'a PieceCatalog,
        color: Color,
        used: PieceSet,
        first_move_completed: bool,
    ) -> impl Iterator<Item = LegalMove> + 'a {
        used.complement().into_iter().flat_map(move |piece| {
            catalog.orientations(piece).iter().enumerate().flat_map(move |(orientation, shape)| {
                Coord::all().filter_map(move |anchor| {
                    self.validate(color, &shape.at(&anchor), first_move_completed)
                        .ok()
                        .map(|_| LegalMove { piece, orientation, anchor })
                })
            })
        })
    }
}
