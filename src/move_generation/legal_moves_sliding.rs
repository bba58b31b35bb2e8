use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Bishop, rook and queen moves, ray-cast until the edge or the first
/// occupied cell.
pub fn generate_sliding_moves(board: &BoardState, captures_only: bool, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let tables = board.tables();

    for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
        for from in board.pieces(side, kind) {
            for &direction in kind.sliding_directions() {
                for to in tables.ray(from, direction) {
                    let target = board.piece_at(to);
                    if target.is_none() {
                        if !captures_only {
                            out.push(Move::new(from, to, Piece::NONE));
                        }
                        continue;
                    }
                    if target.is_color(side.opposite()) {
                        out.push(Move::new(from, to, target));
                    }
                    break;
                }
            }
        }
    }
}
