//! Error types returned by the parsing and configuration surfaces.
//!
//! Rule violations inside the engine (an illegal move reaching `make_move`, a
//! repetition count underflowing) are programming errors and panic instead.

use std::io;

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Failure to read a position string or an algebraic cell name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("position must have 5 space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("board layout must have 11 groups, found {0}")]
    GroupCount(usize),

    /// A `/`-separated group describes the wrong number of cells.
    #[error("group {group} must describe {expected} cells, found {found}")]
    GroupLength {
        group: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid empty-cell run '{0}'")]
    InvalidRun(String),

    #[error("invalid side to move '{0}'")]
    InvalidSide(String),

    #[error("invalid cell name '{0}'")]
    InvalidCell(String),

    /// The en-passant target is occupied or no opposing pawn stands one step past it.
    #[error("invalid en-passant target '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// Each side needs exactly one king.
    #[error("{color:?} must have exactly one king, found {found}")]
    KingCount { color: Color, found: usize },
}

/// Failure to load an AI configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read AI config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse AI config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{table} must have 91 entries, found {found}")]
    TableLength { table: &'static str, found: usize },
}

/// Failure to interpret text as a move in the current position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("malformed move '{0}'")]
    Malformed(String),

    #[error("'{0}' is not legal in this position")]
    Illegal(String),

    #[error(transparent)]
    Cell(#[from] PositionError),
}
