use crate::game_state::chess_types::*;
use crate::geometry::direction::Direction;
use crate::moves::move_descriptions::{Move, MoveFlag};

/// Pseudo-legal pawn moves. Captures are always emitted; pushes only when
/// `captures_only` is false.
pub fn generate_pawn_moves(board: &BoardState, captures_only: bool, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let tables = board.tables();

    for from in board.pieces(side, PieceKind::Pawn) {
        if !captures_only {
            let pushes = tables.pawn_pushes(side, from);
            if let Some(&single) = pushes.first() {
                if board.piece_at(single).is_none() {
                    push_pawn_move(board, from, single, Piece::NONE, out);
                    if let Some(&double) = pushes.get(1) {
                        if board.piece_at(double).is_none() {
                            out.push(Move::double_pawn_push(from, double, single));
                        }
                    }
                }
            }
        }

        for &to in tables.pawn_captures(side, from) {
            let target = board.piece_at(to);
            if target.is_color(side.opposite()) {
                push_pawn_move(board, from, to, target, out);
            } else if target.is_none() && board.en_passant_target() == Some(to) {
                // The pushed pawn sits one step past the skipped cell.
                let behind = match side {
                    Color::White => Direction::Down,
                    Color::Black => Direction::Up,
                };
                let pushed_pawn = Piece::new(side.opposite(), PieceKind::Pawn);
                if let Some(vacated) = tables.neighbor(to, behind) {
                    if board.piece_at(vacated) == pushed_pawn {
                        out.push(Move::en_passant(from, to, pushed_pawn, vacated));
                    }
                }
            }
        }
    }
}

fn push_pawn_move(board: &BoardState, from: CellIndex, to: CellIndex, captured: Piece, out: &mut Vec<Move>) {
    if board.tables().is_promotion_cell(board.side_to_move(), to) {
        for flag in MoveFlag::PROMOTIONS {
            out.push(Move::promotion(from, to, captured, flag));
        }
    } else {
        out.push(Move::new(from, to, captured));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::BoardState;
    use crate::utils::algebraic::algebraic_to_cell;

    #[test]
    fn en_passant_only_captures_a_pawn() {
        // The parser rejects this target, so set it directly.
        let parsed = BoardState::from_position("1K4/7/8/9/6kP2/11/10/9/8/7/6 w - 0 2")
            .expect("position should parse");
        let target = algebraic_to_cell("h6").expect("test cell should parse");
        let board = BoardState::from_parts(
            *parsed.cells(),
            parsed.side_to_move(),
            Some(target),
            parsed.halfmove_clock(),
            parsed.fullmove_number(),
        );

        let mut moves = Vec::new();
        generate_pawn_moves(&board, false, &mut moves);
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
        assert!(moves.iter().any(|mv| mv.to_string() == "i5i6"));
    }
}
