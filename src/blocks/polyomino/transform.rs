use crate::blocks::prelude::*;

/// An enum that represents the 8 symmetries of the square acting on piece-local cells.
///
/// Each variant is a number of quarter turns `(x, y) -> (y, -x)`, optionally followed by
/// a horizontal reflection `(x, y) -> (-x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Transform {
    Identity,
    Rot90,
    Rot180,
    Rot270,
    Reflect,
    ReflRot90,
    ReflRot180,
    ReflRot270,
}

impl Transform {
    /// Gets all transforms in canonical order.
    pub fn all() -> [Transform; 8] {
        [
            Transform::Identity,
            Transform::Rot90,
            Transform::Rot180,
            Transform::Rot270,
            Transform::Reflect,
            Transform::ReflRot90,
            Transform::ReflRot180,
            Transform::ReflRot270,
        ]
    }

    /// Applies a transformation to an offset point.
    pub fn apply_one(&self, offset: &OffsetCoord) -> OffsetCoord {
        let OffsetCoord { x, y } = *offset;
        match self {
            Transform::Identity   => OffsetCoord::new(x, y),
            Transform::Rot90      => OffsetCoord::new(y, -x),
            Transform::Rot180     => OffsetCoord::new(-x, -y),
            Transform::Rot270     => OffsetCoord::new(-y, x),
            Transform::Reflect    => OffsetCoord::new(-x, y),
            Transform::ReflRot90  => OffsetCoord::new(-y, -x),
            Transform::ReflRot180 => OffsetCoord::new(x, -y),
            Transform::ReflRot270 => OffsetCoord::new(y, x),
        }
    }

    /// The order in which orientations are generated: at each of four quarter turns, the
    /// rotated shape and then its mirror.
    pub fn generation_order() -> [Transform; 8] {
        let mut order = [Transform::Identity; 8];
        let mut current = Transform::Identity;
        for i in 0..4 {
            order[2 * i] = current;
            order[2 * i + 1] = current.then_reflect();
            current = current.then_rotate();
        }
        order
    }

    /// Returns the transform given by reflecting after this transform.
    pub fn then_reflect(&self) -> Transform {
        match self {
            Transform::Identity   => Transform::Reflect,
            Transform::Rot90      => Transform::ReflRot90,
            Transform::Rot180     => Transform::ReflRot180,
            Transform::Rot270     => Transform::ReflRot270,
            Transform::Reflect    => Transform::Identity,
            Transform::ReflRot90  => Transform::Rot90,
            Transform::ReflRot180 => Transform::Rot180,
            Transform::ReflRot270 => Transform::Rot270,
        }
    }

    /// Returns the transform given by rotating a quarter turn after this transform.
    pub fn then_rotate(&self) -> Transform {
        match self {
            Transform::Identity   => Transform::Rot90,
            Transform::Rot90      => Transform::Rot180,
            Transform::Rot180     => Transform::Rot270,
            Transform::Rot270     => Transform::Identity,
            Transform::Reflect    => Transform::ReflRot270,
            Transform::ReflRot90  => Transform::Reflect,
            Transform::ReflRot180 => Transform::ReflRot90,
            Transform::ReflRot270 => Transform::ReflRot180,
        }
    }
}

/// Produces the de-duplicated normalized orientations of a shape. Orientations are kept in
/// first-seen order over `Transform::generation_order`, so the list is stable across calls.
pub fn orientations_of(shape: &Shape) -> Vec<Shape> {
    if shape.is_empty() {
        return vec![];
    }
    let mut seen: HashSet<Shape> = HashSet::new();
    let mut orientations = vec![];
    for transform in Transform::generation_order() {
        let candidate = shape.transform(transform).normalize();
        if seen.insert(candidate.clone()) {
            orientations.push(candidate);
        }
    }
    orientations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Shape {
        // the asymmetric F pentomino, so every transform is distinguishable
        Shape::from_pairs(&[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
    }

    #[test]
    fn composition_matches_application() {
        let shape = sample();
        for transform in Transform::all() {
            let applied = shape.transform(transform);
            assert_eq!(shape.transform(transform.then_rotate()), applied.rotate());
            assert_eq!(shape.transform(transform.then_reflect()), applied.reflect());
        }
    }

    #[test]
    fn generation_order_covers_the_group() {
        let order = Transform::generation_order();
        let distinct = order.iter().collect::<BTreeSet<_>>();
        assert_eq!(distinct.len(), 8);
        assert_eq!(order[0], Transform::Identity);
        assert_eq!(order[1], Transform::Reflect);
        assert_eq!(order[2], Transform::Rot90);
    }

    #[test]
    fn generation_matches_rotate_and_mirror_loop() {
        let shape = sample();
        let mut expected: Vec<Shape> = vec![];
        let mut current = shape.clone();
        for _ in 0..4 {
            for candidate in [current.normalize(), current.reflect().normalize()] {
                if !expected.contains(&candidate) {
                    expected.push(candidate);
                }
            }
            current = current.rotate();
        }
        assert_eq!(orientations_of(&shape), expected);
    }

    #[test]
    fn four_rotations_is_identity() {
        let shape = sample();
        assert_eq!(shape.rotate().rotate().rotate().rotate(), shape);
        assert_eq!(shape.reflect().reflect(), shape);
    }

    #[test]
    fn orientation_counts_follow_symmetry() {
        assert_eq!(orientations_of(&Shape::from_pairs(&[(0, 0)])).len(), 1);
        assert_eq!(orientations_of(&Shape::from_pairs(&[(0, 0), (1, 0)])).len(), 2);
        assert_eq!(orientations_of(&Shape::from_pairs(&[(0, 0), (1, 0), (0, 1), (1, 1)])).len(), 1);
        assert_eq!(orientations_of(&sample()).len(), 8);
    }

    #[test]
    fn orientations_are_reproducible() {
        assert_eq!(orientations_of(&sample()), orientations_of(&sample()));
    }
}
