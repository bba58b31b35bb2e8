use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Single undo record for `make_move` / `unmake_move`.
///
/// `removed` holds the captured piece (if any) followed by the mover, in the
/// order they were lifted; `added` is the piece placed on the destination.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Move,
    pub removed: [Option<(CellIndex, Piece)>; 2],
    pub added: Option<(CellIndex, Piece)>,

    pub prev_side_to_move: Color,
    pub prev_en_passant_target: Option<CellIndex>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,

    pub prev_zobrist_key: u64,
}
