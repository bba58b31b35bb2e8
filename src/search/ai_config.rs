//! Tunable evaluation data for the default AI, loaded from JSON.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::game_state::chess_types::{PieceKind, CELL_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PieceValues {
    pub pawn_value: i32,
    pub bishop_value: i32,
    pub knight_value: i32,
    pub rook_value: i32,
    pub queen_value: i32,
}

impl PieceValues {
    /// Material value of `kind`; kings are never traded and score zero.
    #[inline]
    pub fn value_of(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn_value,
            PieceKind::Bishop => self.bishop_value,
            PieceKind::Knight => self.knight_value,
            PieceKind::Rook => self.rook_value,
            PieceKind::Queen => self.queen_value,
            PieceKind::King => 0,
        }
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn_value: 100,
            bishop_value: 300,
            knight_value: 350,
            rook_value: 550,
            queen_value: 1000,
        }
    }
}

/// Positional bonus per cell, written from white's side of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PieceCellTables {
    pub pawn_cell_table: Vec<i32>,
    pub bishop_cell_table: Vec<i32>,
    pub knight_cell_table: Vec<i32>,
    pub rook_cell_table: Vec<i32>,
    pub queen_cell_table: Vec<i32>,
    pub king_cell_table: Vec<i32>,
}

impl PieceCellTables {
    #[inline]
    pub fn table_for(&self, kind: PieceKind) -> &[i32] {
        match kind {
            PieceKind::Pawn => &self.pawn_cell_table,
            PieceKind::Bishop => &self.bishop_cell_table,
            PieceKind::Knight => &self.knight_cell_table,
            PieceKind::Rook => &self.rook_cell_table,
            PieceKind::Queen => &self.queen_cell_table,
            PieceKind::King => &self.king_cell_table,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("PawnCellTable", &self.pawn_cell_table),
            ("BishopCellTable", &self.bishop_cell_table),
            ("KnightCellTable", &self.knight_cell_table),
            ("RookCellTable", &self.rook_cell_table),
            ("QueenCellTable", &self.queen_cell_table),
            ("KingCellTable", &self.king_cell_table),
        ];
        for (table, values) in named {
            if values.len() != CELL_COUNT {
                return Err(ConfigError::TableLength {
                    table,
                    found: values.len(),
                });
            }
        }
        Ok(())
    }
}

impl Default for PieceCellTables {
    fn default() -> Self {
        let zeros = vec![0; CELL_COUNT];
        Self {
            pawn_cell_table: zeros.clone(),
            bishop_cell_table: zeros.clone(),
            knight_cell_table: zeros.clone(),
            rook_cell_table: zeros.clone(),
            queen_cell_table: zeros.clone(),
            king_cell_table: zeros,
        }
    }
}

/// Mop-up weights, each expressed in hundredths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StrategyWeights {
    pub mop_up_enemy_king_centre_distance_weight: i32,
    pub mop_up_distance_between_kings_weight: i32,
    pub mop_up_enemy_piece_count_weight: i32,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            mop_up_enemy_king_centre_distance_weight: 100,
            mop_up_distance_between_kings_weight: 50,
            mop_up_enemy_piece_count_weight: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AiConfig {
    pub piece_values: PieceValues,
    pub piece_cell_tables: PieceCellTables,
    pub strategy_weights: StrategyWeights,
}

impl AiConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: AiConfig = serde_json::from_str(text)?;
        if let Err(err) = config.piece_cell_tables.validate() {
            warn!("rejecting AI config: {err}");
            return Err(err);
        }
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::AiConfig;
    use crate::errors::ConfigError;
    use crate::game_state::chess_types::PieceKind;

    const SHIPPED_CONFIG: &str = include_str!("../../data/default_ai.json");

    #[test]
    fn shipped_config_loads() {
        let config = AiConfig::from_json_str(SHIPPED_CONFIG).expect("shipped config should load");
        assert_eq!(config.piece_values.value_of(PieceKind::Queen), 1000);
        assert_eq!(config.piece_cell_tables.table_for(PieceKind::King).len(), 91);
    }

    #[test]
    fn default_config_survives_json() {
        let config = AiConfig::default();
        let text = config.to_json_string().expect("config should serialize");
        assert!(text.contains("\"MopUpEnemyKingCentreDistanceWeight\": 100"));
        assert_eq!(AiConfig::from_json_str(&text).expect("config should load"), config);
    }

    #[test]
    fn short_table_is_rejected() {
        let mut config = AiConfig::default();
        config.piece_cell_tables.rook_cell_table.pop();
        let text = config.to_json_string().expect("config should serialize");
        assert!(matches!(
            AiConfig::from_json_str(&text),
            Err(ConfigError::TableLength {
                table: "RookCellTable",
                found: 90
            })
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(AiConfig::from_json_str("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn missing_file_is_reported() {
        assert!(matches!(
            AiConfig::from_path("does/not/exist.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
