//! Pins against the side to move's king, read off the attack manager.

use crate::game_state::chess_types::*;
use crate::geometry::direction::Direction;

/// A friendly piece that may only move along the line between its king and
/// an enemy slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub pinned: CellIndex,
    pub pinner: CellIndex,
    /// Direction the pinner's ray travels toward the king.
    pub direction: Direction,
    /// King-to-pinner cells, pinner included and the pinned cell excluded.
    pub axis: CellSet,
}

impl Pin {
    #[inline]
    pub fn allows(&self, destination: CellIndex) -> bool {
        self.axis.contains(destination)
    }
}

/// Every piece of `king_color` pinned to its own king.
pub fn get_pins(board: &BoardState, king_color: Color) -> Vec<Pin> {
    let tables = board.tables();
    let attacks = board.attacks();
    let king = board.king_cell(king_color);
    let enemy = king_color.opposite();
    let mut pins = Vec::new();

    for outward in Direction::ALL {
        let Some(candidate) = tables
            .ray(king, outward)
            .find(|cell| !board.piece_at(*cell).is_none())
        else {
            continue;
        };
        if !board.piece_at(candidate).is_color(king_color) {
            continue;
        }

        let inward = outward.reverse();
        let Some(pinner) = attacks.sliding_attacker(candidate, enemy, inward) else {
            continue;
        };

        let mut axis = CellSet::EMPTY;
        for cell in tables.ray(king, outward) {
            if cell != candidate {
                axis.insert(cell);
            }
            if cell == pinner {
                break;
            }
        }

        pins.push(Pin {
            pinned: candidate,
            pinner,
            direction: inward,
            axis,
        });
    }

    pins
}
