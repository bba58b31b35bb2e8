//! Leaf-node counting over the legal move tree, with per-leaf breakdowns.

use std::thread;

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::get_moves;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count the leaves `depth` plies below `board`. The board is walked with
/// make/unmake and is left as it was found.
pub fn perft(board: &mut BoardState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in get_moves(board, false) {
        perft_recurse(board, mv, depth, 1, &mut total);
    }
    total
}

/// Same counts as [`perft`], with each root move searched on its own thread
/// against a private copy of the board.
pub fn perft_multi_threaded(board: &BoardState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let root_moves = get_moves(board, false);
    let totals = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local_board = BoardState::copy_from(board);
                    let mut local = PerftCounts::default();
                    perft_recurse(&mut local_board, mv, depth, 1, &mut local);
                    local
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect::<Vec<_>>()
    });

    let mut total = PerftCounts::default();
    for local in totals {
        total.merge(local);
    }
    total
}

fn perft_recurse(board: &mut BoardState, mv: Move, search_depth: u8, current_depth: u8, counts: &mut PerftCounts) {
    board.make_move(mv);

    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if mv.is_en_passant() {
            counts.en_passant += 1;
        }
        if mv.promotion_kind().is_some() {
            counts.promotions += 1;
        }
        if board.is_in_check(board.side_to_move()) {
            counts.checks += 1;
            if get_moves(board, false).is_empty() {
                counts.checkmates += 1;
            }
        }
    } else {
        for child in get_moves(board, false) {
            perft_recurse(board, child, search_depth, current_depth + 1, counts);
        }
    }

    board.unmake_move();
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_multi_threaded, PerftCounts};
    use crate::game_state::chess_types::BoardState;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut board = BoardState::new_game();
        assert_eq!(
            perft(&mut board, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_depth_one() {
        let mut board = BoardState::new_game();
        assert_eq!(perft(&mut board, 1).nodes, 51);
    }

    #[test]
    fn start_position_depth_two_breakdown() {
        let mut board = BoardState::new_game();
        let before = board.to_position_string();

        let counts = perft(&mut board, 2);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 2_586,
                captures: 13,
                en_passant: 0,
                promotions: 0,
                checks: 1,
                checkmates: 0,
            }
        );
        assert_eq!(board.to_position_string(), before);
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn threaded_perft_matches_single_threaded() {
        let mut board = BoardState::new_game();
        let single = perft(&mut board, 2);
        assert_eq!(perft_multi_threaded(&board, 2), single);
    }

    #[test]
    #[ignore = "slow in debug builds"]
    fn start_position_depth_three() {
        let board = BoardState::new_game();
        let counts = perft_multi_threaded(&board, 3);
        assert_eq!(counts.nodes, 137_858);
        assert_eq!(counts.captures, 1_823);
        assert_eq!(counts.en_passant, 6);
        assert_eq!(counts.checks, 371);
    }
}
