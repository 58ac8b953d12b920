pub mod catalog;
pub mod transform;

use super::prelude::*;

use itertools::Itertools;
pub use catalog::{PieceCatalog, PieceDefinition};
pub use transform::Transform;

/// A polyomino as an ordered sequence of piece-local cells.
///
/// Equality, ordering and hashing are structural over the cell sequence, so two shapes compare
/// equal as orientations exactly when their normalized forms do.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shape(Vec<OffsetCoord>);

impl Shape {
    /// Constructs a shape from raw piece-local cells, without normalizing.
    pub fn new(cells: impl IntoIterator<Item = OffsetCoord>) -> Shape {
        Shape(cells.into_iter().collect())
    }

    /// Constructs a shape from `(x, y)` pairs, without normalizing.
    pub fn from_pairs(pairs: &[(isize, isize)]) -> Shape {
        Shape::new(pairs.iter().map(|&(x, y)| OffsetCoord::new(x, y)))
    }

    /// Places the shape's local origin on the anchor, giving signed board cells that may lie off-board.
    pub fn at(&self, anchor: &Coord) -> Vec<OffsetCoord> {
        self.0.iter().map(|c| anchor + c).collect()
    }

    /// The piece-local cells of the shape.
    pub fn cells(&self) -> &[OffsetCoord] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the shape is already in canonical form.
    #[cfg(test)]
    pub(crate) fn is_normalized(&self) -> bool {
        self.normalize() == *self
    }

    /// Canonicalizes a shape by:
    /// 1. translating it so the minimum x and minimum y are both 0
    /// 2. sorting the cells by row, then column
    /// 3. dropping duplicate cells
    pub fn normalize(&self) -> Shape {
        let (Some(min_x), Some(min_y)) = (self.0.iter().map(|c| c.x).min(), self.0.iter().map(|c| c.y).min()) else {
            return Shape::default();
        };
        let origin = OffsetCoord::new(min_x, min_y);
        Shape(self.0.iter().map(|c| c - &origin).sorted().dedup().collect())
    }

    /// The distinct normalized orientations of this shape, in generation order.
    pub fn orientations(&self) -> Vec<Shape> {
        transform::orientations_of(self)
    }

    /// Mirrors the shape horizontally, `(x, y) -> (-x, y)`, without normalizing.
    pub fn reflect(&self) -> Shape {
        self.transform(Transform::Reflect)
    }

    /// Rotates the shape a quarter turn, `(x, y) -> (y, -x)`, without normalizing.
    pub fn rotate(&self) -> Shape {
        self.transform(Transform::Rot90)
    }

    /// Applies a transform to every cell, without normalizing.
    pub fn transform(&self, transform: Transform) -> Shape {
        Shape(self.0.iter().map(|c| transform.apply_one(c)).collect())
    }

    /// Renders the shape as rows of `#` and `.`.
    pub fn pretty(&self) -> String {
        let shape = self.normalize();
        let width = shape.0.iter().map(|c| c.x + 1).max().unwrap_or(0);
        let height = shape.0.iter().map(|c| c.y + 1).max().unwrap_or(0);
        (0..height).map(|y| {
            (0..width).map(|x| {
                if shape.0.contains(&OffsetCoord::new(x, y)) { '#' } else { '.' }
            }).collect::<String>()
        }).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_translates_and_sorts() {
        let shape = Shape::from_pairs(&[(3, 5), (2, 6), (2, 5)]);
        assert_eq!(shape.normalize(), Shape::from_pairs(&[(0, 0), (1, 0), (0, 1)]));
    }

    #[test]
    fn normalize_handles_negative_cells_and_duplicates() {
        let shape = Shape::from_pairs(&[(-2, -1), (-1, -1), (-2, -1)]);
        assert_eq!(shape.normalize(), Shape::from_pairs(&[(0, 0), (1, 0)]));
    }

    #[test]
    fn normalize_is_idempotent() {
        let catalog = PieceCatalog::new();
        let extra = [
            Shape::from_pairs(&[(5, -3), (4, -3), (4, -2), (9, 9)]),
            Shape::from_pairs(&[(-7, 0)]),
            Shape::default(),
        ];
        let shapes = catalog.definitions().iter().map(|d| d.shape.clone()).chain(extra);
        for shape in shapes {
            let once = shape.normalize();
            assert_eq!(once.normalize(), once);
            assert!(once.is_normalized());
        }
    }

    #[test]
    fn empty_shape_normalizes_to_empty() {
        assert!(Shape::default().normalize().is_empty());
        assert!(Shape::default().orientations().is_empty());
    }

    #[test]
    fn at_maps_origin_onto_anchor() {
        let shape = Shape::from_pairs(&[(0, 0), (1, 0), (0, 1)]);
        let cells = shape.at(&Coord::new(19, 3));
        assert_eq!(cells, vec![OffsetCoord::new(19, 3), OffsetCoord::new(20, 3), OffsetCoord::new(19, 4)]);
    }

    #[test]
    fn pretty_prints_rows() {
        let shape = Shape::from_pairs(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(shape.pretty(), "#.\n##");
    }
}
