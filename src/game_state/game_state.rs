//! Classification of a position for the side to move.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Normal,
    Check,
    /// Fifty moves by each side without a capture or pawn move.
    Draw,
    Stalemate,
    Checkmate,
    ThreefoldRepetitionDraw,
}

impl GameState {
    /// True when no further moves may be played.
    #[inline]
    pub const fn is_game_over(self) -> bool {
        !matches!(self, GameState::Normal | GameState::Check)
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameState::Draw | GameState::Stalemate | GameState::ThreefoldRepetitionDraw
        )
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameState::Normal => "normal",
            GameState::Check => "check",
            GameState::Draw => "draw by the fifty-move rule",
            GameState::Stalemate => "stalemate",
            GameState::Checkmate => "checkmate",
            GameState::ThreefoldRepetitionDraw => "draw by threefold repetition",
        };
        f.write_str(text)
    }
}
