//! Zobrist hashing support for position identity and repetition tracking.
//!
//! The keys are generated from a fixed seed so hashes are deterministic across
//! runs, which is useful for testing and debugging.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::{BoardState, CellIndex, Color, Piece, CELL_COUNT};

const ZOBRIST_SEED: u64 = 26_061_986;

/// One slot per `(color, kind)` pair.
const PIECE_SLOTS: usize = 12;

#[derive(Debug)]
struct ZobristTables {
    piece_cell: [[u64; PIECE_SLOTS]; CELL_COUNT],
    en_passant: [u64; CELL_COUNT],
    black_to_move: u64,
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_cell = [[0u64; PIECE_SLOTS]; CELL_COUNT];
    for cell in &mut piece_cell {
        for key in cell {
            *key = rng.random();
        }
    }

    let mut en_passant = [0u64; CELL_COUNT];
    for key in &mut en_passant {
        *key = rng.random();
    }

    ZobristTables {
        piece_cell,
        en_passant,
        black_to_move: rng.random(),
    }
}

/// Key for `piece` standing on `cell`; zero for an empty cell.
#[inline]
pub fn piece_cell_key(piece: Piece, cell: CellIndex) -> u64 {
    match (piece.color(), piece.kind()) {
        (Some(color), Some(kind)) => tables().piece_cell[cell][color.index() * 6 + kind.index()],
        _ => 0,
    }
}

#[inline]
pub fn en_passant_key(cell: CellIndex) -> u64 {
    tables().en_passant[cell]
}

/// Side-to-move toggle key (xor in when black is to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().black_to_move
}

/// Compute the full position key from scratch.
pub fn compute_zobrist_key(board: &BoardState) -> u64 {
    let mut key = board
        .cells()
        .iter()
        .enumerate()
        .fold(0u64, |acc, (cell, piece)| acc ^ piece_cell_key(*piece, cell));

    if board.side_to_move() == Color::Black {
        key ^= side_to_move_key();
    }
    if let Some(cell) = board.en_passant_target() {
        key ^= en_passant_key(cell);
    }

    key
}
