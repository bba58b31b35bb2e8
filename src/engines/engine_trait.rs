//! Engine abstraction consumed by front ends.
//!
//! A front end hands an engine a board, usually from a worker thread, and
//! polls the engine's progress string from its own thread meanwhile.

use crate::game_state::chess_types::BoardState;
use crate::moves::move_descriptions::Move;
use crate::search::progress::ProgressString;

pub trait ChessAi: Send + Sync {
    fn name(&self) -> &str;

    /// Best move for the side to move, or `None` when it has no legal move.
    /// The caller's board is never modified.
    fn choose_move(&self, board: &BoardState) -> Option<Move>;

    /// Static score from the side to move's point of view.
    fn evaluate(&self, board: &BoardState) -> i32;

    fn progress(&self) -> &ProgressString;
}
