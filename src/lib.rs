//! Crate root module declarations for the hexagonal chess engine.
//!
//! Exposes the board geometry, game state, move generation, search, engine
//! and utility subsystems under stable paths for the binary, benches and
//! external front ends.

pub mod errors;

pub mod geometry {
    pub mod cell_set;
    pub mod cube_coordinate;
    pub mod direction;
    pub mod move_tables;
}

pub mod game_state {
    pub mod attack_manager;
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod check;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod move_generator;
    pub mod perft;
    pub mod pin;
}

pub mod search {
    pub mod ai_config;
    pub mod board_scoring;
    pub mod negamax;
    pub mod progress;
    pub mod repetition_table;
    pub mod zobrist;
}

pub mod engines {
    pub mod default_ai;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod long_algebraic;
    pub mod position_generator;
    pub mod position_parser;
    pub mod render_board;
}
