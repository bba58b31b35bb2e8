//! Precomputed per-cell geometry: coordinates, neighbours and jump-piece
//! destinations.
//!
//! Built once on first use and shared by `&'static` reference. Black's pawn
//! tables are white's rotated half a turn about the centre cell.

use std::iter;
use std::sync::OnceLock;

use crate::game_state::chess_rules::{WHITE_DOUBLE_STEP_CELLS, WHITE_PROMOTION_CELLS};
use crate::game_state::chess_types::Color;
use crate::geometry::cell_set::CellSet;
use crate::geometry::cube_coordinate::{CellIndex, CubeCoordinate, CELL_COUNT};
use crate::geometry::direction::{Direction, DIRECTION_COUNT};

/// Two steps along the first direction, then one along the second.
const KNIGHT_LEGS: [(Direction, Direction); 12] = [
    (Direction::Up, Direction::UpLeft),
    (Direction::Up, Direction::UpRight),
    (Direction::UpRight, Direction::Up),
    (Direction::UpRight, Direction::DownRight),
    (Direction::DownRight, Direction::UpRight),
    (Direction::DownRight, Direction::Down),
    (Direction::Down, Direction::DownRight),
    (Direction::Down, Direction::DownLeft),
    (Direction::DownLeft, Direction::Down),
    (Direction::DownLeft, Direction::UpLeft),
    (Direction::UpLeft, Direction::DownLeft),
    (Direction::UpLeft, Direction::Up),
];

#[derive(Debug)]
pub struct MoveTables {
    coordinates: [CubeCoordinate; CELL_COUNT],
    neighbors: [[Option<CellIndex>; DIRECTION_COUNT]; CELL_COUNT],
    pawn_pushes: [Vec<Vec<CellIndex>>; 2],
    pawn_captures: [Vec<Vec<CellIndex>>; 2],
    knight_moves: Vec<Vec<CellIndex>>,
    king_moves: Vec<Vec<CellIndex>>,
    promotion_cells: [CellSet; 2],
}

static TABLES: OnceLock<MoveTables> = OnceLock::new();

/// Shared move tables, built on first call.
#[inline]
pub fn move_tables() -> &'static MoveTables {
    TABLES.get_or_init(build_tables)
}

/// Index of the cell opposite `index` through the board centre.
#[inline]
pub const fn mirror(index: CellIndex) -> CellIndex {
    CELL_COUNT - 1 - index
}

impl MoveTables {
    #[inline]
    pub fn coordinate(&self, cell: CellIndex) -> CubeCoordinate {
        self.coordinates[cell]
    }

    #[inline]
    pub fn neighbor(&self, cell: CellIndex, direction: Direction) -> Option<CellIndex> {
        self.neighbors[cell][direction.index()]
    }

    /// Cells walked from `cell` along `direction`, excluding `cell`, up to the edge.
    #[inline]
    pub fn ray(&self, cell: CellIndex, direction: Direction) -> impl Iterator<Item = CellIndex> + '_ {
        iter::successors(self.neighbor(cell, direction), move |&next| {
            self.neighbor(next, direction)
        })
    }

    /// Single push first, then the double push when available.
    #[inline]
    pub fn pawn_pushes(&self, color: Color, cell: CellIndex) -> &[CellIndex] {
        &self.pawn_pushes[color.index()][cell]
    }

    #[inline]
    pub fn pawn_captures(&self, color: Color, cell: CellIndex) -> &[CellIndex] {
        &self.pawn_captures[color.index()][cell]
    }

    #[inline]
    pub fn knight_moves(&self, cell: CellIndex) -> &[CellIndex] {
        &self.knight_moves[cell]
    }

    #[inline]
    pub fn king_moves(&self, cell: CellIndex) -> &[CellIndex] {
        &self.king_moves[cell]
    }

    #[inline]
    pub fn is_promotion_cell(&self, color: Color, cell: CellIndex) -> bool {
        self.promotion_cells[color.index()].contains(cell)
    }

    #[inline]
    pub fn distance(&self, a: CellIndex, b: CellIndex) -> i32 {
        self.coordinates[a].distance(self.coordinates[b])
    }

    /// Sliding direction leading from `from` to `to`, if they share a line.
    #[inline]
    pub fn sliding_direction_between(&self, from: CellIndex, to: CellIndex) -> Option<Direction> {
        self.coordinates[from].sliding_direction_to(self.coordinates[to])
    }
}

fn build_tables() -> MoveTables {
    let mut coordinates = [CubeCoordinate::CENTER; CELL_COUNT];
    for (index, slot) in coordinates.iter_mut().enumerate() {
        if let Some(coord) = CubeCoordinate::from_index(index) {
            *slot = coord;
        }
    }

    let mut neighbors = [[None; DIRECTION_COUNT]; CELL_COUNT];
    for (index, row) in neighbors.iter_mut().enumerate() {
        for direction in Direction::ALL {
            row[direction.index()] = coordinates[index].step(direction, 1).index();
        }
    }

    let white_pushes: Vec<Vec<CellIndex>> = coordinates
        .iter()
        .enumerate()
        .map(|(index, coord)| white_pawn_pushes(*coord, index))
        .collect();
    let white_captures: Vec<Vec<CellIndex>> = coordinates
        .iter()
        .map(|coord| {
            [Direction::UpLeft, Direction::UpRight]
                .into_iter()
                .filter_map(|direction| coord.step(direction, 1).index())
                .collect()
        })
        .collect();

    let knight_moves = coordinates
        .iter()
        .map(|coord| {
            KNIGHT_LEGS
                .iter()
                .filter_map(|(long, short)| coord.step(*long, 2).step(*short, 1).index())
                .collect()
        })
        .collect();

    let king_moves = neighbors
        .iter()
        .map(|row| row.iter().flatten().copied().collect())
        .collect();

    let black_pushes = rotate_table(&white_pushes);
    let black_captures = rotate_table(&white_captures);

    MoveTables {
        coordinates,
        neighbors,
        pawn_pushes: [white_pushes, black_pushes],
        pawn_captures: [white_captures, black_captures],
        knight_moves,
        king_moves,
        promotion_cells: [
            WHITE_PROMOTION_CELLS.into_iter().collect(),
            WHITE_PROMOTION_CELLS.into_iter().map(mirror).collect(),
        ],
    }
}

fn white_pawn_pushes(coord: CubeCoordinate, index: CellIndex) -> Vec<CellIndex> {
    let mut pushes = Vec::with_capacity(2);
    if let Some(single) = coord.step(Direction::Up, 1).index() {
        pushes.push(single);
        if WHITE_DOUBLE_STEP_CELLS.contains(&index) {
            pushes.extend(coord.step(Direction::Up, 2).index());
        }
    }
    pushes
}

fn rotate_table(white: &[Vec<CellIndex>]) -> Vec<Vec<CellIndex>> {
    (0..CELL_COUNT)
        .map(|index| white[mirror(index)].iter().map(|cell| mirror(*cell)).collect())
        .collect()
}
