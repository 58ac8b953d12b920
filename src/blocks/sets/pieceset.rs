use crate::blocks::prelude::*;

type SubSet = u32;

const EXTENT_MASK: SubSet = {
    let ones = ((1 as SubSet) << NUM_PIECES) - 1; // one bit per piece in the catalog
    ones
};

/// A bitset of piece ids, one bit per catalog index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PieceSet(SubSet);

impl PieceSet {
    /// The set of every piece.
    pub fn full() -> PieceSet {
        PieceSet(EXTENT_MASK)
    }

    /// The pieces not in this set.
    pub fn complement(&self) -> PieceSet {
        PieceSet(!self.0 & EXTENT_MASK)
    }

    #[inline]
    fn _bit(value: &PieceId) -> SubSet {
        (1 as SubSet) << value.index()
    }
}

impl SetOps<PieceId> for PieceSet {
    fn contains(&self, value: &PieceId) -> bool {
        self.0 & PieceSet::_bit(value) != 0
    }

    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    fn iter(&self) -> impl Iterator<Item = PieceId> {
        PieceSetIterator { data: self.0 }
    }

    fn insert(&mut self, value: &PieceId) -> &mut Self {
        self.0 |= PieceSet::_bit(value);
        self
    }

    fn remove(&mut self, value: &PieceId) -> &mut Self {
        self.0 &= !PieceSet::_bit(value);
        self
    }

    fn union(&self, other: &Self) -> Self {
        let mut s = *self;
        s.union_inplace(other);
        s
    }

    fn union_inplace(&mut self, other: &Self) -> &mut Self {
        self.0 |= other.0;
        self
    }

    fn difference(&self, other: &Self) -> Self {
        let mut s = *self;
        s.difference_inplace(other);
        s
    }

    fn difference_inplace(&mut self, other: &Self) -> &mut Self {
        self.0 &= !other.0;
        self
    }
}

impl FromIterator<PieceId> for PieceSet {
    fn from_iter<T: IntoIterator<Item = PieceId>>(iter: T) -> Self {
        let mut s = PieceSet::default();
        iter.into_iter().for_each(|id| {
            s.insert(&id);
        });
        s
    }
}

/// Iterates the members of a piece set in catalog order.
pub struct PieceSetIterator {
    data: SubSet,
}

impl Iterator for PieceSetIterator {
    type Item = PieceId;
    fn next(&mut self) -> Option<Self::Item> {
        if self.data == 0 {
            return None;
        }
        let tz = self.data.trailing_zeros() as usize;
        self.data &= self.data - 1; // knock out the lowest set bit for the next iteration
        PieceId::try_from_index(tz).ok()
    }
}

impl IntoIterator for PieceSet {
    type IntoIter = PieceSetIterator;
    type Item = PieceId;
    fn into_iter(self) -> Self::IntoIter {
        PieceSetIterator { data: self.0 }
    }
}
