use crate::blocks::prelude::*;

impl Board {
    /// Decides whether the colour may cover the candidate cells. The first failing rule wins:
    /// 1. every cell lies on the board
    /// 2. no cell is already covered, by any colour
    /// 3. a colour's first piece covers its home corner
    /// 4. no cell shares an edge with the colour's own cells
    /// 5. after the first piece, some cell shares a corner with the colour's own cells
    ///
    /// Rule 4 fails on any single cell; rule 5 passes if any single cell qualifies.
    pub fn validate(
        &self,
        color: Color,
        cells: &[OffsetCoord],
        first_move_completed: bool,
    ) -> std::result::Result<(), Rejection> {
        if cells.is_empty() {
            return Err(Rejection::EmptyPlacement);
        }

        let Some(coords) = cells.iter().map(|c| c.on_board()).collect::<Option<Vec<Coord>>>() else {
            return Err(Rejection::OutOfBounds);
        };

        if coords.iter().any(|c| self.cell_unchecked(c).is_some()) {
            return Err(Rejection::Overlap);
        }

        if !first_move_completed && !coords.contains(&color.corner()) {
            return Err(Rejection::MissingCornerCoverage);
        }

        let mut corner_touch = false;
        for coord in &coords {
            if ORTHOGONAL_OFFSETS.iter().any(|offset| self.owned_by(&(coord + offset), color)) {
                return Err(Rejection::EdgeAdjacency);
            }
            corner_touch |= DIAGONAL_OFFSETS.iter().any(|offset| self.owned_by(&(coord + offset), color));
        }

        if first_move_completed && !corner_touch {
            return Err(Rejection::MissingCornerTouch);
        }
        Ok(())
    }
}
