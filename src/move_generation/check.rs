//! Checks against a king and the moves that answer them.

use crate::game_state::chess_types::*;
use crate::geometry::direction::Direction;
use crate::geometry::move_tables::MoveTables;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub attacker: CellIndex,
    pub king: CellIndex,
    /// Ray direction for a sliding attacker; `None` for pawns and knights.
    pub direction: Option<Direction>,
    /// Cells strictly between attacker and king.
    pub block_cells: CellSet,
}

impl Check {
    /// True if `mv` leaves the king out of this particular attack.
    pub fn is_resolved_by(&self, mv: Move, tables: &MoveTables) -> bool {
        if mv.start() == self.king {
            // The cell behind the king is still on the ray once the king steps off it.
            return match self.direction {
                Some(direction) => tables.neighbor(self.king, direction) != Some(mv.destination()),
                None => true,
            };
        }
        if mv.destination() == self.attacker {
            return true;
        }
        if mv.is_en_passant() && mv.aux_cell() == Some(self.attacker) {
            return true;
        }
        self.block_cells.contains(mv.destination())
    }
}

/// Every check `attacker_color` currently gives the opposing king.
pub fn get_checks(board: &BoardState, attacker_color: Color) -> Vec<Check> {
    let tables = board.tables();
    let defender = attacker_color.opposite();
    let king = board.king_cell(defender);
    let mut checks = Vec::new();

    // Pawn and knight attack patterns are symmetric, so look outward from the king.
    let pawn = Piece::new(attacker_color, PieceKind::Pawn);
    let knight = Piece::new(attacker_color, PieceKind::Knight);
    let jumpers = tables
        .pawn_captures(defender, king)
        .iter()
        .filter(|cell| board.piece_at(**cell) == pawn)
        .chain(
            tables
                .knight_moves(king)
                .iter()
                .filter(|cell| board.piece_at(**cell) == knight),
        );
    for &attacker in jumpers {
        checks.push(Check {
            attacker,
            king,
            direction: None,
            block_cells: CellSet::EMPTY,
        });
    }

    for direction in Direction::ALL {
        let Some(attacker) = board.attacks().sliding_attacker(king, attacker_color, direction) else {
            continue;
        };
        let block_cells = tables
            .ray(attacker, direction)
            .take_while(|cell| *cell != king)
            .collect();
        checks.push(Check {
            attacker,
            king,
            direction: Some(direction),
            block_cells,
        });
    }

    checks
}
