//! Compact set of board cells backed by a 128-bit mask.

use crate::geometry::cube_coordinate::{CellIndex, CELL_COUNT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet(u128);

impl CellSet {
    pub const EMPTY: CellSet = CellSet(0);

    #[inline]
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u128 {
        self.0
    }

    #[inline]
    pub const fn contains(self, cell: CellIndex) -> bool {
        cell < CELL_COUNT && self.0 & (1u128 << cell) != 0
    }

    #[inline]
    pub fn insert(&mut self, cell: CellIndex) {
        debug_assert!(cell < CELL_COUNT);
        self.0 |= 1u128 << cell;
    }

    #[inline]
    pub fn remove(&mut self, cell: CellIndex) {
        debug_assert!(cell < CELL_COUNT);
        self.0 &= !(1u128 << cell);
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    /// Cells in ascending index order.
    #[inline]
    pub fn iter(self) -> CellSetIter {
        CellSetIter(self.0)
    }
}

impl FromIterator<CellIndex> for CellSet {
    fn from_iter<I: IntoIterator<Item = CellIndex>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = CellIndex;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> CellSetIter {
        self.iter()
    }
}

pub struct CellSetIter(u128);

impl Iterator for CellSetIter {
    type Item = CellIndex;

    #[inline]
    fn next(&mut self) -> Option<CellIndex> {
        if self.0 == 0 {
            return None;
        }
        let cell = self.0.trailing_zeros() as CellIndex;
        self.0 &= self.0 - 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}
