//! Packed 32-bit move record.
//!
//! Layout, low bits first: start (7), destination (7), captured piece tag (5),
//! flag (3), auxiliary cell (7). The auxiliary cell is the cell skipped by a
//! double push, or the cell an en-passant capture vacates.

use std::fmt;

use crate::game_state::chess_types::{CellIndex, Piece, PieceKind};
use crate::utils::algebraic::cell_to_algebraic;

const START_SHIFT: u32 = 0;
const DESTINATION_SHIFT: u32 = 7;
const CAPTURED_SHIFT: u32 = 14;
const FLAG_SHIFT: u32 = 19;
const AUX_SHIFT: u32 = 22;

const CELL_MASK: u32 = 0x7F;
const PIECE_MASK: u32 = 0x1F;
const FLAG_MASK: u32 = 0x7;

const NO_AUX_CELL: u32 = CELL_MASK;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    None,
    DoublePawnPush,
    EnPassantCapture,
    PromoteToBishop,
    PromoteToKnight,
    PromoteToRook,
    PromoteToQueen,
}

impl MoveFlag {
    /// Promotion flags in the order moves are generated.
    pub const PROMOTIONS: [MoveFlag; 4] = [
        MoveFlag::PromoteToBishop,
        MoveFlag::PromoteToKnight,
        MoveFlag::PromoteToRook,
        MoveFlag::PromoteToQueen,
    ];

    #[inline]
    const fn code(self) -> u32 {
        self as u32
    }

    #[inline]
    const fn from_code(code: u32) -> MoveFlag {
        match code {
            1 => MoveFlag::DoublePawnPush,
            2 => MoveFlag::EnPassantCapture,
            3 => MoveFlag::PromoteToBishop,
            4 => MoveFlag::PromoteToKnight,
            5 => MoveFlag::PromoteToRook,
            6 => MoveFlag::PromoteToQueen,
            _ => MoveFlag::None,
        }
    }

    #[inline]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        match self {
            MoveFlag::PromoteToBishop => Some(PieceKind::Bishop),
            MoveFlag::PromoteToKnight => Some(PieceKind::Knight),
            MoveFlag::PromoteToRook => Some(PieceKind::Rook),
            MoveFlag::PromoteToQueen => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u32);

impl Move {
    #[inline]
    fn pack(start: CellIndex, destination: CellIndex, captured: Piece, flag: MoveFlag, aux: Option<CellIndex>) -> Self {
        debug_assert!(start < CELL_MASK as usize && destination < CELL_MASK as usize);
        let aux = aux.map_or(NO_AUX_CELL, |cell| cell as u32);
        Self(
            (start as u32) << START_SHIFT
                | (destination as u32) << DESTINATION_SHIFT
                | u32::from(captured.bits()) << CAPTURED_SHIFT
                | flag.code() << FLAG_SHIFT
                | aux << AUX_SHIFT,
        )
    }

    /// Plain move or capture; `captured` is `Piece::NONE` for a quiet move.
    #[inline]
    pub fn new(start: CellIndex, destination: CellIndex, captured: Piece) -> Self {
        Self::pack(start, destination, captured, MoveFlag::None, None)
    }

    #[inline]
    pub fn double_pawn_push(start: CellIndex, destination: CellIndex, skipped: CellIndex) -> Self {
        Self::pack(start, destination, Piece::NONE, MoveFlag::DoublePawnPush, Some(skipped))
    }

    /// En-passant capture of `captured`, which stands on `vacated`.
    #[inline]
    pub fn en_passant(start: CellIndex, destination: CellIndex, captured: Piece, vacated: CellIndex) -> Self {
        Self::pack(start, destination, captured, MoveFlag::EnPassantCapture, Some(vacated))
    }

    #[inline]
    pub fn promotion(start: CellIndex, destination: CellIndex, captured: Piece, flag: MoveFlag) -> Self {
        debug_assert!(flag.promotion_kind().is_some());
        Self::pack(start, destination, captured, flag, None)
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn start(self) -> CellIndex {
        ((self.0 >> START_SHIFT) & CELL_MASK) as CellIndex
    }

    #[inline]
    pub const fn destination(self) -> CellIndex {
        ((self.0 >> DESTINATION_SHIFT) & CELL_MASK) as CellIndex
    }

    #[inline]
    pub fn captured_piece(self) -> Piece {
        Piece::from_bits(((self.0 >> CAPTURED_SHIFT) & PIECE_MASK) as u8).unwrap_or(Piece::NONE)
    }

    #[inline]
    pub const fn flag(self) -> MoveFlag {
        MoveFlag::from_code((self.0 >> FLAG_SHIFT) & FLAG_MASK)
    }

    #[inline]
    pub const fn aux_cell(self) -> Option<CellIndex> {
        match (self.0 >> AUX_SHIFT) & CELL_MASK {
            NO_AUX_CELL => None,
            cell => Some(cell as CellIndex),
        }
    }

    #[inline]
    pub fn is_capture(self) -> bool {
        !self.captured_piece().is_none()
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.flag(), MoveFlag::EnPassantCapture)
    }

    #[inline]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        self.flag().promotion_kind()
    }

    /// Cell the captured piece is removed from.
    #[inline]
    pub const fn capture_cell(self) -> CellIndex {
        match (self.flag(), self.aux_cell()) {
            (MoveFlag::EnPassantCapture, Some(cell)) => cell,
            _ => self.destination(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", cell_to_algebraic(self.start()), cell_to_algebraic(self.destination()))?;
        if let Some(kind) = self.promotion_kind() {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
