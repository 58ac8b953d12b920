use crate::blocks::prelude::*;

/// An immutable piece record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceDefinition {
    pub id: PieceId,
    pub name: &'static str,
    pub shape: Shape,
}

/// The fixed piece set, with every piece's orientations precomputed.
#[derive(Clone, Debug)]
pub struct PieceCatalog {
    /// Get a piece definition by id index.
    definitions: Vec<PieceDefinition>,

    /// Get a piece's orientation list by id index; the order is the order the selection cycles through.
    orientations: Vec<Vec<Shape>>,
}

impl Default for PieceCatalog {
    fn default() -> Self {
        PieceCatalog::new()
    }
}

impl PieceCatalog {
    /// Creates a new PieceCatalog.
    pub fn new() -> PieceCatalog {
        let definitions = PieceId::all().iter().map(|&id| {
            let (name, cells) = PieceCatalog::_template(id);
            PieceDefinition { id, name, shape: Shape::from_pairs(cells) }
        }).collect::<Vec<_>>();

        let orientations = definitions.iter().map(|d| d.shape.orientations()).collect();

        PieceCatalog { definitions, orientations }
    }

    /// Gets every definition in catalog order.
    pub fn definitions(&self) -> &[PieceDefinition] {
        &self.definitions
    }

    /// Gets a piece definition by id.
    pub fn get(&self, id: PieceId) -> &PieceDefinition {
        &self.definitions[id.index()]
    }

    /// Gets the display name of a piece.
    pub fn name(&self, id: PieceId) -> &'static str {
        self.get(id).name
    }

    /// Gets the orientations of a piece.
    pub fn orientations(&self, id: PieceId) -> &[Shape] {
        &self.orientations[id.index()]
    }

    /// Tries to get the given orientation of a piece.
    pub fn orientation(&self, id: PieceId, index: usize) -> Result<&Shape> {
        self.orientations(id).get(index).ok_or_else(|| {
            anyhow!("{id} has {} orientations, {index} is out of range", self.orientations(id).len())
        })
    }

    /// The number of squares in a piece.
    pub fn size(&self, id: PieceId) -> usize {
        self.get(id).shape.len()
    }

    /// The number of squares over every piece in the set.
    pub fn total_squares(&self) -> usize {
        self.definitions.iter().map(|d| d.shape.len()).sum()
    }

    #[cfg(test)]
    pub(crate) fn replace_orientations(&mut self, id: PieceId, orientations: Vec<Shape>) {
        self.orientations[id.index()] = orientations;
    }

    /// Gets the name and base cells of each piece as `(x, y)` pairs.
    fn _template(id: PieceId) -> (&'static str, &'static [(isize, isize)]) {
        match id {
            PieceId::P1  => ("Single",      &[(0, 0)]),
            PieceId::P2  => ("Domino",      &[(0, 0), (1, 0)]),
            PieceId::P3  => ("Triomino I",  &[(0, 0), (1, 0), (2, 0)]),
            PieceId::P4  => ("Triomino L",  &[(0, 0), (0, 1), (1, 0)]),
            PieceId::P5  => ("Tetromino I", &[(0, 0), (1, 0), (2, 0), (3, 0)]),
            PieceId::P6  => ("Tetromino O", &[(0, 0), (1, 0), (0, 1), (1, 1)]),
            PieceId::P7  => ("Tetromino L", &[(0, 0), (0, 1), (0, 2), (1, 0)]),
            PieceId::P8  => ("Tetromino T", &[(0, 0), (1, 0), (2, 0), (1, 1)]),
            PieceId::P9  => ("Tetromino S", &[(1, 0), (2, 0), (0, 1), (1, 1)]),
            PieceId::P10 => ("Pentomino F", &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]),
            PieceId::P11 => ("Pentomino I", &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
            PieceId::P12 => ("Pentomino L", &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 0)]),
            PieceId::P13 => ("Pentomino P", &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]),
            PieceId::P14 => ("Pentomino N", &[(0, 0), (1, 0), (1, 1), (2, 1), (3, 1)]),
            PieceId::P15 => ("Pentomino T", &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)]),
            PieceId::P16 => ("Pentomino U", &[(0, 0), (0, 1), (1, 1), (2, 0), (2, 1)]),
            PieceId::P17 => ("Pentomino V", &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]),
            PieceId::P18 => ("Pentomino W", &[(0, 0), (1, 1), (1, 0), (2, 1), (2, 2)]),
            PieceId::P19 => ("Pentomino X", &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]),
            PieceId::P20 => ("Pentomino Y", &[(0, 0), (1, 0), (2, 0), (3, 0), (1, 1)]),
            PieceId::P21 => ("Pentomino Z", &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)]),
        }
    }
}
