//! Canonical rule constants for Glinski-layout hexagonal chess.
//!
//! Cell lists are given for white; black's equivalents are the point
//! reflection `90 - index`.

/// Starting position in position-string notation.
pub const STARTING_POSITION: &str =
    "BKNRP1/QB2P2/N1B1P3/R3P4/PPPPP5/11/5ppppp/4p3r/3p1b1n/2p2bk/1prnqb w - 0 1";

/// Cells from which a white pawn may advance two cells.
pub const WHITE_DOUBLE_STEP_CELLS: [usize; 10] = [30, 31, 32, 33, 34, 35, 25, 17, 10, 4];

/// Far-edge cells where a white pawn promotes.
pub const WHITE_PROMOTION_CELLS: [usize; 11] = [50, 60, 69, 77, 84, 85, 86, 87, 88, 89, 90];

/// Half-moves without a capture or pawn move that end the game as a draw.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Visits of one position that end the game as a draw.
pub const REPETITION_DRAW_VISITS: u8 = 3;

/// Most pieces a side can own (king included).
pub const MAX_PIECES_PER_SIDE: i32 = 18;
