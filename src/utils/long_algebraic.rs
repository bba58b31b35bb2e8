//! Text form of moves: start cell, destination cell, optional promotion
//! letter (`f5f6`, `f10f11q`).

use crate::errors::MoveParseError;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::get_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_cell;

#[inline]
pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}

/// Resolve `text` against the legal moves of `board`.
pub fn long_algebraic_to_move(text: &str, board: &BoardState) -> Result<Move, MoveParseError> {
    let (from, to, promotion) = split_move_text(text)?;
    let from = algebraic_to_cell(from)?;
    let to = algebraic_to_cell(to)?;
    let promotion = match promotion {
        None => None,
        Some(ch) => Some(
            PieceKind::ALL
                .into_iter()
                .filter(|kind| !matches!(kind, PieceKind::Pawn | PieceKind::King))
                .find(|kind| kind.letter() == ch)
                .ok_or_else(|| MoveParseError::Malformed(text.to_owned()))?,
        ),
    };

    get_moves(board, false)
        .into_iter()
        .find(|mv| mv.start() == from && mv.destination() == to && mv.promotion_kind() == promotion)
        .ok_or_else(|| MoveParseError::Illegal(text.to_owned()))
}

/// Split into two cell names and an optional trailing promotion letter.
fn split_move_text(text: &str) -> Result<(&str, &str, Option<char>), MoveParseError> {
    let malformed = || MoveParseError::Malformed(text.to_owned());
    if !text.is_ascii() {
        return Err(malformed());
    }

    let cell_end = |from: usize| {
        text[from + 1..]
            .find(|ch: char| !ch.is_ascii_digit())
            .map_or(text.len(), |offset| from + 1 + offset)
    };

    let first_end = cell_end(0);
    if first_end >= text.len() {
        return Err(malformed());
    }
    let second_end = cell_end(first_end);

    let promotion = match &text[second_end..] {
        "" => None,
        rest if rest.len() == 1 => rest.chars().next(),
        _ => return Err(malformed()),
    };
    Ok((&text[..first_end], &text[first_end..second_end], promotion))
}
