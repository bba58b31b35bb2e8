//! The twelve movement directions of the hexagonal board.
//!
//! The first six step to an edge-adjacent cell and form the rook's "files".
//! The last six jump to the nearest cell along a hex diagonal and form the
//! bishop's movement class. Queens use all twelve, kings step once in any.

/// Movement direction, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    UpRight,
    DownRight,
    Down,
    DownLeft,
    UpLeft,
    DiagonalUpRight,
    DiagonalRight,
    DiagonalDownRight,
    DiagonalDownLeft,
    DiagonalLeft,
    DiagonalUpLeft,
}

pub const DIRECTION_COUNT: usize = 12;

impl Direction {
    pub const ALL: [Direction; DIRECTION_COUNT] = [
        Direction::Up,
        Direction::UpRight,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::UpLeft,
        Direction::DiagonalUpRight,
        Direction::DiagonalRight,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
        Direction::DiagonalLeft,
        Direction::DiagonalUpLeft,
    ];

    /// Edge-adjacent directions (rook class).
    pub const FILES: [Direction; 6] = [
        Direction::Up,
        Direction::UpRight,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    /// Hex diagonals (bishop class).
    pub const DIAGONALS: [Direction; 6] = [
        Direction::DiagonalUpRight,
        Direction::DiagonalRight,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
        Direction::DiagonalLeft,
        Direction::DiagonalUpLeft,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit offset as `(dq, dr, ds)`.
    #[inline]
    pub const fn offset(self) -> (i8, i8, i8) {
        match self {
            Direction::Up => (0, -1, 1),
            Direction::UpRight => (1, -1, 0),
            Direction::DownRight => (1, 0, -1),
            Direction::Down => (0, 1, -1),
            Direction::DownLeft => (-1, 1, 0),
            Direction::UpLeft => (-1, 0, 1),
            Direction::DiagonalUpRight => (1, -2, 1),
            Direction::DiagonalRight => (2, -1, -1),
            Direction::DiagonalDownRight => (1, 1, -2),
            Direction::DiagonalDownLeft => (-1, 2, -1),
            Direction::DiagonalLeft => (-2, 1, 1),
            Direction::DiagonalUpLeft => (-1, -1, 2),
        }
    }

    #[inline]
    pub const fn reverse(self) -> Direction {
        let index = self.index();
        let group = index - index % 6;
        Self::ALL[group + (index % 6 + 3) % 6]
    }

    #[inline]
    pub const fn is_file(self) -> bool {
        self.index() < 6
    }
}
