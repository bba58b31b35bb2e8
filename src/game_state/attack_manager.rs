//! Incrementally maintained attack information for both colors.
//!
//! Per color, every cell holds the number of pieces attacking it and, for each
//! of the twelve directions, the origin of the nearest sliding piece whose ray
//! travels through the cell in that direction. A ray includes the occupied
//! cell it stops on.
//!
//! The manager never looks at the contents of the cell being changed, only at
//! the cells beyond it, so callers may update the cell array before or after
//! calling [`AttackManager::add_piece`] / [`AttackManager::remove_piece`].

use crate::game_state::chess_types::{CellIndex, Color, Piece, PieceKind, CELL_COUNT};
use crate::geometry::direction::{Direction, DIRECTION_COUNT};
use crate::geometry::move_tables::{move_tables, MoveTables};

const NO_ATTACKER: u8 = u8::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Update {
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackManager {
    counts: [[u8; CELL_COUNT]; 2],
    sliding: [[[u8; DIRECTION_COUNT]; CELL_COUNT]; 2],
}

impl Default for AttackManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AttackManager {
    pub fn new() -> Self {
        Self {
            counts: [[0; CELL_COUNT]; 2],
            sliding: [[[NO_ATTACKER; DIRECTION_COUNT]; CELL_COUNT]; 2],
        }
    }

    /// Build attack state for `cells` from scratch.
    pub fn from_cells(cells: &[Piece; CELL_COUNT]) -> Self {
        let mut manager = Self::new();
        manager.recalculate(cells);
        manager
    }

    /// Discard the current state and re-derive it from every piece on `cells`.
    pub fn recalculate(&mut self, cells: &[Piece; CELL_COUNT]) {
        *self = Self::new();
        let tables = move_tables();
        for (cell, piece) in cells.iter().enumerate() {
            if !piece.is_none() {
                self.apply_own_attacks(tables, cells, cell, *piece, Update::Add);
            }
        }
    }

    /// Register `piece` arriving on `cell`: truncate rays that pass through the
    /// cell, then add the piece's own attacks.
    pub fn add_piece(&mut self, cells: &[Piece; CELL_COUNT], cell: CellIndex, piece: Piece) {
        let tables = move_tables();
        self.block_rays_through(tables, cells, cell);
        self.apply_own_attacks(tables, cells, cell, piece, Update::Add);
    }

    /// Register `piece` leaving `cell`: drop the piece's own attacks, then let
    /// rays that stopped on the cell continue past it.
    pub fn remove_piece(&mut self, cells: &[Piece; CELL_COUNT], cell: CellIndex, piece: Piece) {
        let tables = move_tables();
        self.apply_own_attacks(tables, cells, cell, piece, Update::Remove);
        self.extend_rays_through(tables, cells, cell);
    }

    #[inline]
    pub fn attack_count(&self, cell: CellIndex, by: Color) -> u8 {
        self.counts[by.index()][cell]
    }

    #[inline]
    pub fn is_attacked(&self, cell: CellIndex, by: Color) -> bool {
        self.counts[by.index()][cell] > 0
    }

    /// Origin of the `by` slider whose ray reaches `cell` travelling in `direction`.
    #[inline]
    pub fn sliding_attacker(&self, cell: CellIndex, by: Color, direction: Direction) -> Option<CellIndex> {
        match self.sliding[by.index()][cell][direction.index()] {
            NO_ATTACKER => None,
            origin => Some(origin as CellIndex),
        }
    }

    fn apply_own_attacks(
        &mut self,
        tables: &MoveTables,
        cells: &[Piece; CELL_COUNT],
        cell: CellIndex,
        piece: Piece,
        update: Update,
    ) {
        let (Some(color), Some(kind)) = (piece.color(), piece.kind()) else {
            return;
        };
        let counts = &mut self.counts[color.index()];
        let jump_targets = match kind {
            PieceKind::Pawn => tables.pawn_captures(color, cell),
            PieceKind::Knight => tables.knight_moves(cell),
            PieceKind::King => tables.king_moves(cell),
            _ => &[],
        };
        for &target in jump_targets {
            bump(&mut counts[target], update);
        }

        for &direction in kind.sliding_directions() {
            self.walk_ray(tables, cells, color, cell, direction, cell, update);
        }
    }

    fn block_rays_through(&mut self, tables: &MoveTables, cells: &[Piece; CELL_COUNT], cell: CellIndex) {
        for color in Color::BOTH {
            for direction in Direction::ALL {
                if let Some(origin) = self.sliding_attacker(cell, color, direction) {
                    self.walk_ray(tables, cells, color, cell, direction, origin, Update::Remove);
                }
            }
        }
    }

    fn extend_rays_through(&mut self, tables: &MoveTables, cells: &[Piece; CELL_COUNT], cell: CellIndex) {
        for color in Color::BOTH {
            for direction in Direction::ALL {
                if let Some(origin) = self.sliding_attacker(cell, color, direction) {
                    self.walk_ray(tables, cells, color, cell, direction, origin, Update::Add);
                }
            }
        }
    }

    /// Walk from `from` (exclusive) along `direction` up to and including the
    /// first occupied cell, crediting or debiting `origin`'s attack.
    #[allow(clippy::too_many_arguments)]
    fn walk_ray(
        &mut self,
        tables: &MoveTables,
        cells: &[Piece; CELL_COUNT],
        color: Color,
        from: CellIndex,
        direction: Direction,
        origin: CellIndex,
        update: Update,
    ) {
        let entry = match update {
            Update::Add => origin as u8,
            Update::Remove => NO_ATTACKER,
        };
        for target in tables.ray(from, direction) {
            bump(&mut self.counts[color.index()][target], update);
            self.sliding[color.index()][target][direction.index()] = entry;
            if !cells[target].is_none() {
                break;
            }
        }
    }
}

#[inline]
fn bump(count: &mut u8, update: Update) {
    match update {
        Update::Add => *count += 1,
        Update::Remove => *count -= 1,
    }
}
