//! Cube coordinates for the 91-cell hexagonal board.
//!
//! A cell is addressed by `(q, r, s)` with `q + r + s == 0` and every axis in
//! `-5..=5`. Cells are linearized by `s` group, so `index = FILE_OFFSETS[s + 5] + q`.

use crate::geometry::direction::Direction;

/// Linear cell index (`0..=90`).
pub type CellIndex = usize;

pub const CELL_COUNT: usize = 91;
pub const BOARD_RADIUS: i8 = 5;

/// Index of `q == 0` within each `s` group, indexed by `s + 5`.
pub const FILE_OFFSETS: [usize; 11] = [0, 7, 15, 24, 34, 45, 56, 66, 75, 83, 90];

/// Number of cells in each `s` group, in index order.
pub const GROUP_LENGTHS: [usize; 11] = [6, 7, 8, 9, 10, 11, 10, 9, 8, 7, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeCoordinate {
    pub q: i8,
    pub r: i8,
    pub s: i8,
}

impl CubeCoordinate {
    pub const CENTER: CubeCoordinate = CubeCoordinate { q: 0, r: 0, s: 0 };

    /// Build a coordinate.
    ///
    /// # Panics
    /// Panics if the axes do not sum to zero.
    #[inline]
    pub const fn new(q: i8, r: i8, s: i8) -> Self {
        assert!(q + r + s == 0, "cube coordinate axes must sum to zero");
        Self { q, r, s }
    }

    /// Coordinate from the two independent axes.
    #[inline]
    pub const fn from_qs(q: i8, s: i8) -> Self {
        Self { q, r: -q - s, s }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.q >= -BOARD_RADIUS
            && self.q <= BOARD_RADIUS
            && self.r >= -BOARD_RADIUS
            && self.r <= BOARD_RADIUS
            && self.s >= -BOARD_RADIUS
            && self.s <= BOARD_RADIUS
    }

    /// Linear index, or `None` when the coordinate lies off the board.
    #[inline]
    pub const fn index(self) -> Option<CellIndex> {
        if !self.is_on_board() {
            return None;
        }
        let offset = FILE_OFFSETS[(self.s + BOARD_RADIUS) as usize] as isize;
        Some((offset + self.q as isize) as CellIndex)
    }

    /// Inverse of [`CubeCoordinate::index`].
    pub fn from_index(index: CellIndex) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let group = (0..FILE_OFFSETS.len())
            .rev()
            .find(|&group| group_first_index(group) <= index)?;
        let s = group as i8 - BOARD_RADIUS;
        let q = (index as isize - FILE_OFFSETS[group] as isize) as i8;
        Some(Self::from_qs(q, s))
    }

    /// Coordinate `n` steps away along `direction`. May leave the board.
    #[inline]
    pub const fn step(self, direction: Direction, n: i8) -> Self {
        let (dq, dr, ds) = direction.offset();
        Self {
            q: self.q + dq * n,
            r: self.r + dr * n,
            s: self.s + ds * n,
        }
    }

    /// Hex distance in single-cell steps.
    #[inline]
    pub fn distance(self, other: CubeCoordinate) -> i32 {
        let dq = (self.q as i32 - other.q as i32).abs();
        let dr = (self.r as i32 - other.r as i32).abs();
        let ds = (self.s as i32 - other.s as i32).abs();
        (dq + dr + ds) / 2
    }

    /// Direction `d` such that `other == self.step(d, k)` for some `k >= 1`.
    pub fn sliding_direction_to(self, other: CubeCoordinate) -> Option<Direction> {
        let delta = (
            other.q as i32 - self.q as i32,
            other.r as i32 - self.r as i32,
            other.s as i32 - self.s as i32,
        );
        if delta == (0, 0, 0) {
            return None;
        }
        Direction::ALL.into_iter().find(|direction| {
            let (dq, dr, ds) = direction.offset();
            let (dq, dr, ds) = (dq as i32, dr as i32, ds as i32);
            let scale = if dq != 0 { delta.0 / dq } else { delta.1 / dr };
            scale >= 1 && delta == (dq * scale, dr * scale, ds * scale)
        })
    }
}

/// First linear index of the `s` group at `group`.
const fn group_first_index(group: usize) -> CellIndex {
    (FILE_OFFSETS[group] as isize + group_first_q(group) as isize) as CellIndex
}

/// Smallest `q` present in the `s` group at `group`.
const fn group_first_q(group: usize) -> i8 {
    let s = group as i8 - BOARD_RADIUS;
    if s < 0 {
        -BOARD_RADIUS - s
    } else {
        -BOARD_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::{CubeCoordinate, CELL_COUNT, GROUP_LENGTHS};
    use crate::geometry::direction::Direction;

    #[test]
    fn every_on_board_coordinate_has_a_unique_index() {
        let mut seen = [false; CELL_COUNT];
        for q in -5..=5i8 {
            for s in -5..=5i8 {
                let coord = CubeCoordinate::from_qs(q, s);
                match coord.index() {
                    Some(index) => {
                        assert!(!seen[index], "duplicate index {index}");
                        seen[index] = true;
                        assert_eq!(CubeCoordinate::from_index(index), Some(coord));
                    }
                    None => assert!(!coord.is_on_board()),
                }
            }
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn groups_follow_index_order() {
        let mut index = 0;
        for (group, len) in GROUP_LENGTHS.iter().enumerate() {
            for _ in 0..*len {
                let coord = CubeCoordinate::from_index(index).expect("index should map");
                assert_eq!(coord.s, group as i8 - 5);
                index += 1;
            }
        }
        assert_eq!(index, CELL_COUNT);
    }

    #[test]
    fn point_reflection_mirrors_index() {
        for index in 0..CELL_COUNT {
            let coord = CubeCoordinate::from_index(index).expect("index should map");
            let mirrored = CubeCoordinate::new(-coord.q, -coord.r, -coord.s);
            assert_eq!(mirrored.index(), Some(90 - index));
        }
    }

    #[test]
    #[should_panic]
    fn unbalanced_axes_panic() {
        let _ = CubeCoordinate::new(1, 1, 1);
    }

    #[test]
    fn sliding_direction_finds_rays() {
        let origin = CubeCoordinate::CENTER;
        let far = origin.step(Direction::DiagonalLeft, 2);
        assert_eq!(origin.sliding_direction_to(far), Some(Direction::DiagonalLeft));
        assert_eq!(far.sliding_direction_to(origin), Some(Direction::DiagonalRight));

        let knight_hop = origin.step(Direction::Up, 2).step(Direction::UpLeft, 1);
        assert_eq!(origin.sliding_direction_to(knight_hop), None);
        assert_eq!(origin.sliding_direction_to(origin), None);
    }

    #[test]
    fn distance_counts_single_steps() {
        let origin = CubeCoordinate::CENTER;
        assert_eq!(origin.distance(origin.step(Direction::Down, 4)), 4);
        assert_eq!(origin.distance(origin.step(Direction::DiagonalRight, 1)), 2);
        assert_eq!(CubeCoordinate::new(5, -5, 0).distance(CubeCoordinate::new(-5, 5, 0)), 10);
    }
}
