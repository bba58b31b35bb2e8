//! Terminal text renderer for the hexagonal board.
//!
//! Files run as columns `a`..`k`; white plays up the page. Neighbouring
//! columns are staggered by half a cell, so each text row holds every other
//! column.

use crate::game_state::chess_types::*;
use crate::geometry::cube_coordinate::{CubeCoordinate, BOARD_RADIUS};

const EMPTY_CELL: char = '.';
const COLUMN_WIDTH: usize = 2;

pub fn render_board(board: &BoardState) -> String {
    let radius = i32::from(BOARD_RADIUS);
    let mut lines = Vec::new();

    // `row` is r - s, which falls by two per step toward black's side.
    for row in -2 * radius..=2 * radius {
        let mut line = String::new();
        for q in -radius..=radius {
            let Some(cell) = cell_at(q, row) else {
                line.push_str(&" ".repeat(COLUMN_WIDTH));
                continue;
            };
            line.push(board.piece_at(cell).to_char().unwrap_or(EMPTY_CELL));
            line.push(' ');
        }
        lines.push(line.trim_end().to_owned());
    }

    let files: Vec<String> = ('a'..='k').map(String::from).collect();
    lines.push(files.join(" "));
    lines.join("\n")
}

fn cell_at(q: i32, row: i32) -> Option<CellIndex> {
    if (row - q) % 2 != 0 {
        return None;
    }
    let r = (row - q) / 2;
    let s = -q - r;
    let coord = CubeCoordinate::new(i8::try_from(q).ok()?, i8::try_from(r).ok()?, i8::try_from(s).ok()?);
    coord.index()
}
