use std::path::Path;

use crate::engines::engine_trait::ChessAi;
use crate::errors::ConfigError;
use crate::game_state::chess_types::BoardState;
use crate::moves::move_descriptions::Move;
use crate::search::ai_config::AiConfig;
use crate::search::board_scoring::{BoardScorer, HexEvaluator};
use crate::search::negamax::{choose_move, SearchConfig, SearchResult};
use crate::search::progress::ProgressString;

/// Fixed-depth alpha-beta engine scored by [`HexEvaluator`].
#[derive(Debug, Clone, Default)]
pub struct DefaultAi {
    evaluator: HexEvaluator,
    search_config: SearchConfig,
    progress: ProgressString,
}

impl DefaultAi {
    pub fn new(config: AiConfig) -> Self {
        Self {
            evaluator: HexEvaluator::new(config),
            search_config: SearchConfig::default(),
            progress: ProgressString::new(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(AiConfig::from_path(path)?))
    }

    pub fn with_search_config(mut self, search_config: SearchConfig) -> Self {
        self.search_config = search_config;
        self
    }

    #[inline]
    pub fn search_config(&self) -> SearchConfig {
        self.search_config
    }

    /// Full search on a private copy of `board`, with statistics.
    pub fn search(&self, board: &BoardState) -> SearchResult {
        let mut scratch = BoardState::copy_from(board);
        choose_move(&mut scratch, &self.evaluator, self.search_config, &self.progress)
    }
}

impl ChessAi for DefaultAi {
    fn name(&self) -> &str {
        "HexChess Default"
    }

    fn choose_move(&self, board: &BoardState) -> Option<Move> {
        self.search(board).best_move
    }

    fn evaluate(&self, board: &BoardState) -> i32 {
        self.evaluator.score(board)
    }

    fn progress(&self) -> &ProgressString {
        &self.progress
    }
}
