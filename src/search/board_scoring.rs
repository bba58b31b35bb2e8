//! Pluggable board evaluation.
//!
//! Search depends only on [`BoardScorer`]; [`HexEvaluator`] is the
//! configurable material, cell-table and mop-up scorer used by the default AI.

use crate::game_state::chess_rules::MAX_PIECES_PER_SIDE;
use crate::game_state::chess_types::*;
use crate::geometry::cube_coordinate::CubeCoordinate;
use crate::geometry::move_tables::mirror;
use crate::search::ai_config::AiConfig;

/// Furthest two cells can be apart.
const MAX_CELL_DISTANCE: i32 = 11;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, board: &BoardState) -> i32;
}

#[derive(Debug, Clone, Default)]
pub struct HexEvaluator {
    config: AiConfig,
}

impl HexEvaluator {
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Piece values only, no positional terms.
    pub fn material(&self, board: &BoardState, color: Color) -> i32 {
        PieceKind::SET_TRACKED
            .iter()
            .map(|kind| board.pieces(color, *kind).len() as i32 * self.config.piece_values.value_of(*kind))
            .sum()
    }

    /// Cell-table bonus; black reads each table point-reflected.
    pub fn positional(&self, board: &BoardState, color: Color) -> i32 {
        let tables = &self.config.piece_cell_tables;
        PieceKind::ALL
            .iter()
            .flat_map(|kind| board.pieces(color, *kind).iter().map(move |cell| (*kind, cell)))
            .map(|(kind, cell)| {
                let entry = match color {
                    Color::White => cell,
                    Color::Black => mirror(cell),
                };
                tables.table_for(kind)[entry]
            })
            .sum()
    }

    /// Endgame bonus for `color` for driving the enemy king to the rim and
    /// walking its own king toward it. Grows as the enemy runs out of pieces.
    pub fn mop_up(&self, board: &BoardState, color: Color) -> i32 {
        let weights = &self.config.strategy_weights;
        let tables = board.tables();
        let own_king = board.king_cell(color);
        let enemy_king = board.king_cell(color.opposite());

        let enemy_king_centre_distance = tables.coordinate(enemy_king).distance(CubeCoordinate::CENTER);
        let kings_distance = tables.distance(own_king, enemy_king);

        let mut bonus = enemy_king_centre_distance * weights.mop_up_enemy_king_centre_distance_weight / 100;
        bonus += (MAX_CELL_DISTANCE - kings_distance) * weights.mop_up_distance_between_kings_weight / 100;

        let enemy_count = board.piece_count(color.opposite()) as i32;
        let scarcity = (MAX_PIECES_PER_SIDE - enemy_count).max(0);
        bonus * scarcity * weights.mop_up_enemy_piece_count_weight / 100
    }
}

impl BoardScorer for HexEvaluator {
    fn score(&self, board: &BoardState) -> i32 {
        let mover = board.side_to_move();
        let opponent = mover.opposite();

        let mover_material = self.material(board, mover);
        let opponent_material = self.material(board, opponent);

        let mut score = mover_material - opponent_material;
        score += self.positional(board, mover) - self.positional(board, opponent);

        if mover_material > opponent_material {
            score += self.mop_up(board, mover);
        } else if opponent_material > mover_material {
            score -= self.mop_up(board, opponent);
        }

        score
    }
}
