//! Fixed-depth negamax with alpha-beta pruning and a captures-only
//! quiescence extension at the horizon.

use log::debug;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::get_moves;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::BoardScorer;
use crate::search::progress::ProgressString;

/// Score of the side to move when it is checkmated at the root. Deeper mates
/// score higher, so the winner prefers the shortest one.
pub const MATED_SCORE: i32 = i32::MIN + 1;

const WINDOW_LOW: i32 = i32::MIN + 1;
const WINDOW_HIGH: i32 = i32::MAX - 1;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies searched before quiescence, the root move included.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
    pub quiescence_nodes: u64,
}

struct Searcher<'a, S: BoardScorer + ?Sized> {
    scorer: &'a S,
    nodes: u64,
    quiescence_nodes: u64,
}

/// Pick the best move for the side to move. `board` is searched in place with
/// make/unmake and is returned unchanged.
pub fn choose_move<S: BoardScorer + ?Sized>(
    board: &mut BoardState,
    scorer: &S,
    config: SearchConfig,
    progress: &ProgressString,
) -> SearchResult {
    let mut searcher = Searcher {
        scorer,
        nodes: 0,
        quiescence_nodes: 0,
    };

    let moves = get_moves(board, false);
    let move_count = moves.len();
    let mut alpha = WINDOW_LOW;
    let mut best_move = None;
    let mut best_score = WINDOW_LOW;

    for (index, mv) in moves.into_iter().enumerate() {
        progress.write(format!("Searching move {} of {}", index + 1, move_count));

        board.make_move(mv);
        let score = -searcher.search(board, config.depth.saturating_sub(1), 1, -WINDOW_HIGH, -alpha);
        board.unmake_move();

        if best_move.is_none() || score > best_score {
            best_move = Some(mv);
            best_score = score;
        }
        alpha = alpha.max(score);
    }

    progress.write("Search complete");

    let result = SearchResult {
        best_move,
        best_score,
        nodes: searcher.nodes,
        quiescence_nodes: searcher.quiescence_nodes,
    };
    debug!(
        "search depth {} chose {} score {} nodes {} quiescence {}",
        config.depth,
        best_move.map_or_else(|| "none".to_owned(), |mv| mv.to_string()),
        best_score,
        result.nodes,
        result.quiescence_nodes
    );
    result
}

impl<S: BoardScorer + ?Sized> Searcher<'_, S> {
    fn search(&mut self, board: &mut BoardState, depth: u8, ply: i32, mut alpha: i32, beta: i32) -> i32 {
        if depth == 0 {
            return self.search_captures(board, alpha, beta);
        }
        self.nodes += 1;

        let moves = get_moves(board, false);
        match board.update_game_state(moves.len()) {
            GameState::Checkmate => return MATED_SCORE + ply,
            state if state.is_draw() => return 0,
            _ => {}
        }

        for mv in moves {
            board.make_move(mv);
            let score = -self.search(board, depth - 1, ply + 1, -beta, -alpha);
            board.unmake_move();

            if score >= beta {
                return beta;
            }
            alpha = alpha.max(score);
        }

        alpha
    }

    fn search_captures(&mut self, board: &mut BoardState, mut alpha: i32, beta: i32) -> i32 {
        self.quiescence_nodes += 1;

        let stand_pat = self.scorer.score(board);
        if stand_pat >= beta {
            return beta;
        }
        alpha = alpha.max(stand_pat);

        for mv in get_moves(board, true) {
            board.make_move(mv);
            let score = -self.search_captures(board, -beta, -alpha);
            board.unmake_move();

            if score >= beta {
                return beta;
            }
            alpha = alpha.max(score);
        }

        alpha
    }
}
