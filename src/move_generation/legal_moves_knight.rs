use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(board: &BoardState, captures_only: bool, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let tables = board.tables();

    for from in board.pieces(side, PieceKind::Knight) {
        for &to in tables.knight_moves(from) {
            let target = board.piece_at(to);
            if target.is_color(side) || (captures_only && target.is_none()) {
                continue;
            }
            out.push(Move::new(from, to, target));
        }
    }
}
