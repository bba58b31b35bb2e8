//! Position-string to `BoardState` parser.
//!
//! Reads the 11 slash-separated cell groups (index order, run-length digits
//! for empty cells) followed by side to move, en-passant target, half-move
//! clock and full-move number.

use crate::errors::PositionError;
use crate::game_state::chess_types::*;
use crate::geometry::cube_coordinate::GROUP_LENGTHS;
use crate::geometry::direction::Direction;
use crate::geometry::move_tables::move_tables;
use crate::utils::algebraic::algebraic_to_cell;

pub fn parse_position(text: &str) -> Result<BoardState, PositionError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [board_part, side_part, en_passant_part, halfmove_part, fullmove_part] = fields[..] else {
        return Err(PositionError::FieldCount(fields.len()));
    };

    let cells = parse_cells(board_part)?;
    check_kings(&cells)?;

    let side_to_move = parse_side_to_move(side_part)?;
    let en_passant_target = parse_en_passant_target(en_passant_part, &cells, side_to_move)?;
    let halfmove_clock = parse_counter("half-move clock", halfmove_part)?;
    let fullmove_number = parse_counter("full-move number", fullmove_part)?;

    Ok(BoardState::from_parts(
        cells,
        side_to_move,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    ))
}

fn parse_cells(board_part: &str) -> Result<[Piece; CELL_COUNT], PositionError> {
    let groups: Vec<&str> = board_part.split('/').collect();
    if groups.len() != GROUP_LENGTHS.len() {
        return Err(PositionError::GroupCount(groups.len()));
    }

    let mut cells = [Piece::NONE; CELL_COUNT];
    let mut next_cell = 0usize;

    for (group, (text, expected)) in groups.iter().zip(GROUP_LENGTHS).enumerate() {
        let group_cells = parse_group(text)?;
        if group_cells.len() != expected {
            return Err(PositionError::GroupLength {
                group,
                expected,
                found: group_cells.len(),
            });
        }
        cells[next_cell..next_cell + expected].copy_from_slice(&group_cells);
        next_cell += expected;
    }

    Ok(cells)
}

/// Expand one group; consecutive digits form a single run length.
fn parse_group(text: &str) -> Result<Vec<Piece>, PositionError> {
    let mut out = Vec::with_capacity(11);
    let mut run = String::new();

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
            continue;
        }
        flush_run(&mut run, &mut out)?;
        out.push(Piece::from_char(ch).ok_or(PositionError::InvalidPiece(ch))?);
    }
    flush_run(&mut run, &mut out)?;

    Ok(out)
}

fn flush_run(run: &mut String, out: &mut Vec<Piece>) -> Result<(), PositionError> {
    if run.is_empty() {
        return Ok(());
    }
    let empty = run
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=11).contains(n))
        .ok_or_else(|| PositionError::InvalidRun(run.clone()))?;
    out.extend(std::iter::repeat(Piece::NONE).take(empty));
    run.clear();
    Ok(())
}

fn check_kings(cells: &[Piece; CELL_COUNT]) -> Result<(), PositionError> {
    for color in Color::BOTH {
        let king = Piece::new(color, PieceKind::King);
        let found = cells.iter().filter(|piece| **piece == king).count();
        if found != 1 {
            return Err(PositionError::KingCount { color, found });
        }
    }
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, PositionError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(PositionError::InvalidSide(side_part.to_owned())),
    }
}

/// The target must be empty with the opponent's just-pushed pawn one step
/// beyond it.
fn parse_en_passant_target(
    en_passant_part: &str,
    cells: &[Piece; CELL_COUNT],
    side_to_move: Color,
) -> Result<Option<CellIndex>, PositionError> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    let target = algebraic_to_cell(en_passant_part)?;

    let beyond = match side_to_move {
        Color::White => Direction::Down,
        Color::Black => Direction::Up,
    };
    let pushed_pawn = Piece::new(side_to_move.opposite(), PieceKind::Pawn);
    let has_pushed_pawn = move_tables()
        .neighbor(target, beyond)
        .is_some_and(|cell| cells[cell] == pushed_pawn);

    if !cells[target].is_none() || !has_pushed_pawn {
        return Err(PositionError::InvalidEnPassant(en_passant_part.to_owned()));
    }
    Ok(Some(target))
}

fn parse_counter(field: &'static str, value: &str) -> Result<u16, PositionError> {
    value.parse::<u16>().map_err(|_| PositionError::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_position;
    use crate::errors::PositionError;
    use crate::game_state::chess_rules::STARTING_POSITION;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::utils::algebraic::algebraic_to_cell;

    #[test]
    fn starting_position_places_both_armies() {
        let board = parse_position(STARTING_POSITION).expect("start position should parse");
        assert_eq!(board.piece_at(0), Piece::new(Color::White, PieceKind::Bishop));
        assert_eq!(board.piece_at(90), Piece::new(Color::Black, PieceKind::Bishop));
        assert_eq!(board.king_cell(Color::White), 1);
        assert_eq!(board.king_cell(Color::Black), 84);
        assert_eq!(board.pieces(Color::White, PieceKind::Pawn).len(), 9);
        assert_eq!(board.piece_count(Color::Black), 18);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            parse_position("6/7/8/9/10/5K5/10/9/8/7/k5 w - 0").err(),
            Some(PositionError::FieldCount(4))
        );
    }

    #[test]
    fn rejects_short_group() {
        assert_eq!(
            parse_position("6/7/8/9/10/5K4/10/9/8/7/k5 w - 0 1").err(),
            Some(PositionError::GroupLength {
                group: 5,
                expected: 11,
                found: 10
            })
        );
    }

    #[test]
    fn rejects_unknown_piece_and_side() {
        assert_eq!(
            parse_position("6/7/8/9/10/5K4x/10/9/8/7/k5 w - 0 1").err(),
            Some(PositionError::InvalidPiece('x'))
        );
        assert_eq!(
            parse_position("6/7/8/9/10/5K5/10/9/8/7/k5 x - 0 1").err(),
            Some(PositionError::InvalidSide("x".to_owned()))
        );
    }

    #[test]
    fn rejects_missing_king() {
        assert_eq!(
            parse_position("6/7/8/9/10/11/10/9/8/7/k5 w - 0 1").err(),
            Some(PositionError::KingCount {
                color: Color::White,
                found: 0
            })
        );
    }

    #[test]
    fn rejects_bad_counters() {
        assert!(matches!(
            parse_position("6/7/8/9/10/5K5/10/9/8/7/k5 w - x 1"),
            Err(PositionError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_position("6/7/8/9/10/5K5/10/9/8/7/k5 w z9 0 1"),
            Err(PositionError::InvalidCell(_))
        ));
    }

    #[test]
    fn en_passant_target_needs_the_pushed_pawn_behind_it() {
        let board = parse_position("1K4/7/8/9/6pP2/11/10/9/8/6k/6 w h6 0 2").expect("position should parse");
        assert_eq!(board.en_passant_target(), algebraic_to_cell("h6").ok());

        // King instead of a pawn behind the target.
        assert_eq!(
            parse_position("1K4/7/8/9/6kP2/11/10/9/8/7/6 w h6 0 2").err(),
            Some(PositionError::InvalidEnPassant("h6".to_owned()))
        );
        // Own pawn behind the target.
        assert_eq!(
            parse_position("1K4/7/8/9/6PP2/11/10/9/8/6k/6 w h6 0 2").err(),
            Some(PositionError::InvalidEnPassant("h6".to_owned()))
        );
        // Occupied target.
        assert_eq!(
            parse_position("1K4/7/8/9/6pP2/11/10/9/8/6k/6 w i5 0 2").err(),
            Some(PositionError::InvalidEnPassant("i5".to_owned()))
        );
        // Pawn on the wrong side for black to move.
        assert_eq!(
            parse_position("1K4/7/8/9/6pP2/11/10/9/8/6k/6 b h6 0 2").err(),
            Some(PositionError::InvalidEnPassant("h6".to_owned()))
        );
    }
}
