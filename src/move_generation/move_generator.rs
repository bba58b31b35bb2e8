//! Legal move generation.
//!
//! Runs the per-piece pseudo-legal generators, then filters the result with
//! the checks and pins read from the attack manager. No move is applied to
//! the board to test its legality.

use crate::game_state::chess_types::*;
use crate::geometry::direction::Direction;
use crate::move_generation::check::get_checks;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::generate_sliding_moves;
use crate::move_generation::pin::get_pins;
use crate::moves::move_descriptions::Move;

/// Legal moves for the side to move. With `captures_only`, quiet moves are
/// left out (quiet promotions included).
pub fn get_moves(board: &BoardState, captures_only: bool) -> Vec<Move> {
    let side = board.side_to_move();
    let tables = board.tables();
    let pins = get_pins(board, side);

    let mut moves = Vec::with_capacity(if captures_only { 16 } else { 96 });
    generate_pawn_moves(board, captures_only, &mut moves);
    generate_knight_moves(board, captures_only, &mut moves);
    generate_sliding_moves(board, captures_only, &mut moves);
    generate_king_moves(board, captures_only, &mut moves);

    if board.is_in_check(side) {
        let checks = get_checks(board, side.opposite());
        moves.retain(|mv| checks.iter().all(|check| check.is_resolved_by(*mv, tables)));
    }

    if !pins.is_empty() {
        moves.retain(|mv| {
            pins.iter()
                .find(|pin| pin.pinned == mv.start())
                .map_or(true, |pin| pin.allows(mv.destination()))
        });
    }

    moves.retain(|mv| !mv.is_en_passant() || !en_passant_exposes_king(board, *mv));
    moves
}

/// True if lifting both pawns of an en-passant capture opens a line to the
/// mover's king. Covers the case where the two pawns shield the king together
/// and neither counts as pinned alone.
fn en_passant_exposes_king(board: &BoardState, mv: Move) -> bool {
    let side = board.side_to_move();
    let king = board.king_cell(side);
    let vacated = mv.aux_cell();

    Direction::ALL.into_iter().any(|direction| {
        for cell in board.tables().ray(king, direction) {
            if cell == mv.start() || Some(cell) == vacated {
                continue;
            }
            if cell == mv.destination() {
                return false;
            }
            let piece = board.piece_at(cell);
            if !piece.is_none() {
                return piece.is_color(side.opposite()) && piece.slides_along(direction);
            }
        }
        false
    })
}
