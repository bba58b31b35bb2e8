use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// King steps, skipping any cell the opponent currently attacks.
pub fn generate_king_moves(board: &BoardState, captures_only: bool, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let enemy = side.opposite();
    let from = board.king_cell(side);

    for &to in board.tables().king_moves(from) {
        let target = board.piece_at(to);
        if target.is_color(side) || (captures_only && target.is_none()) {
            continue;
        }
        if board.attacks().is_attacked(to, enemy) {
            continue;
        }
        out.push(Move::new(from, to, target));
    }
}
