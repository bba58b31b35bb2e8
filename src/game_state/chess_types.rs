//! Core value types shared by every subsystem: colors, piece kinds and the
//! one-byte piece tag stored in board cells.

pub use crate::game_state::board_state::BoardState;
pub use crate::game_state::undo_state::UndoState;
pub use crate::geometry::cell_set::CellSet;
pub use crate::geometry::cube_coordinate::{CellIndex, CELL_COUNT};

use std::fmt;

use crate::geometry::direction::Direction;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    const fn flag(self) -> u8 {
        match self {
            Color::White => WHITE_FLAG,
            Color::Black => BLACK_FLAG,
        }
    }
}

/// Piece kind; color lives in the tag's upper bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds tracked in the per-type index sets; kings are tracked by index.
    pub const SET_TRACKED: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Bishop => 1,
            PieceKind::Knight => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    const fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    #[inline]
    const fn from_code(code: u8) -> Option<PieceKind> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Directions a sliding kind may travel along. Empty for jump pieces.
    pub const fn sliding_directions(self) -> &'static [Direction] {
        match self {
            PieceKind::Bishop => &Direction::DIAGONALS,
            PieceKind::Rook => &Direction::FILES,
            PieceKind::Queen => &Direction::ALL,
            _ => &[],
        }
    }

    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

const TYPE_MASK: u8 = 0b0_0111;
const COLOR_MASK: u8 = 0b1_1000;
const WHITE_FLAG: u8 = 0b0_1000;
const BLACK_FLAG: u8 = 0b1_0000;

/// One-byte piece tag: kind in the low three bits, color flag above.
///
/// `Piece::NONE` marks an empty cell and is never an ally or enemy of anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const NONE: Piece = Piece(0);

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self(color.flag() | kind.code())
    }

    /// Decode a raw tag, rejecting bit patterns that name no piece.
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits == 0 {
            return Some(Self::NONE);
        }
        let color_ok = matches!(bits & COLOR_MASK, WHITE_FLAG | BLACK_FLAG);
        if color_ok && bits & !(TYPE_MASK | COLOR_MASK) == 0 && PieceKind::from_code(bits & TYPE_MASK).is_some() {
            Some(Self(bits))
        } else {
            None
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.0 & TYPE_MASK)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.0 & COLOR_MASK {
            WHITE_FLAG => Some(Color::White),
            BLACK_FLAG => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        self.0 & COLOR_MASK == color.flag()
    }

    #[inline]
    pub const fn is_kind(self, kind: PieceKind) -> bool {
        self.0 & TYPE_MASK == kind.code()
    }

    #[inline]
    pub const fn is_same_type_as(self, other: Piece) -> bool {
        self.0 & TYPE_MASK == other.0 & TYPE_MASK
    }

    #[inline]
    pub const fn is_ally_of(self, other: Piece) -> bool {
        !self.is_none() && !other.is_none() && self.0 & COLOR_MASK == other.0 & COLOR_MASK
    }

    #[inline]
    pub const fn is_enemy_of(self, other: Piece) -> bool {
        !self.is_none() && !other.is_none() && self.0 & COLOR_MASK != other.0 & COLOR_MASK
    }

    #[inline]
    pub const fn can_move_along_files(self) -> bool {
        self.is_kind(PieceKind::Rook) || self.is_kind(PieceKind::Queen)
    }

    #[inline]
    pub const fn can_move_along_diagonals(self) -> bool {
        self.is_kind(PieceKind::Bishop) || self.is_kind(PieceKind::Queen)
    }

    #[inline]
    pub const fn slides_along(self, direction: Direction) -> bool {
        if direction.is_file() {
            self.can_move_along_files()
        } else {
            self.can_move_along_diagonals()
        }
    }

    /// Position-string letter: uppercase for white, lowercase for black.
    pub const fn to_char(self) -> Option<char> {
        let (Some(kind), Some(color)) = (self.kind(), self.color()) else {
            return None;
        };
        let letter = kind.letter();
        Some(match color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        })
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Self::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(ch) => write!(f, "{ch}"),
            None => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Piece, PieceKind};
    use crate::geometry::direction::Direction;

    #[test]
    fn none_is_never_ally_or_enemy() {
        let white_rook = Piece::new(Color::White, PieceKind::Rook);
        assert!(!Piece::NONE.is_ally_of(white_rook));
        assert!(!Piece::NONE.is_enemy_of(white_rook));
        assert!(!white_rook.is_enemy_of(Piece::NONE));
        assert!(!Piece::NONE.is_ally_of(Piece::NONE));
    }

    #[test]
    fn type_comparison_ignores_color() {
        let white_knight = Piece::new(Color::White, PieceKind::Knight);
        let black_knight = Piece::new(Color::Black, PieceKind::Knight);
        assert!(white_knight.is_same_type_as(black_knight));
        assert!(white_knight.is_enemy_of(black_knight));
        assert_ne!(white_knight, black_knight);
    }

    #[test]
    fn tag_layout_matches_bit_flags() {
        assert_eq!(Piece::new(Color::White, PieceKind::Pawn).bits(), 9);
        assert_eq!(Piece::new(Color::Black, PieceKind::King).bits(), 22);
        assert_eq!(Piece::from_bits(22), Some(Piece::new(Color::Black, PieceKind::King)));
        assert_eq!(Piece::from_bits(7), None);
        assert_eq!(Piece::from_bits(24 | 1), None);
    }

    #[test]
    fn queen_slides_both_ways() {
        let queen = Piece::new(Color::Black, PieceKind::Queen);
        let bishop = Piece::new(Color::Black, PieceKind::Bishop);
        assert!(queen.slides_along(Direction::Up));
        assert!(queen.slides_along(Direction::DiagonalLeft));
        assert!(!bishop.slides_along(Direction::Up));
        assert!(bishop.slides_along(Direction::DiagonalLeft));
    }

    #[test]
    fn letters_round_trip() {
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                let ch = piece.to_char().expect("real piece has a letter");
                assert_eq!(Piece::from_char(ch), Some(piece));
            }
        }
        assert_eq!(Piece::from_char('x'), None);
    }
}
