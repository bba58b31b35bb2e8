//! Cell names in algebraic form (for example `f6` for the centre cell).
//!
//! Files run `a..=k` across the board. The rank counts from white's edge, so
//! it is measured along `r` on the left half and along `s` on the right half.

use crate::errors::PositionError;
use crate::geometry::cube_coordinate::{CellIndex, CubeCoordinate, BOARD_RADIUS};

const RANK_ORIGIN: i8 = 6;

/// Algebraic name of `cell`.
pub fn cell_to_algebraic(cell: CellIndex) -> String {
    let Some(coord) = CubeCoordinate::from_index(cell) else {
        return format!("?{cell}");
    };
    let file = char::from(b'a' + (coord.q + BOARD_RADIUS) as u8);
    let rank = if coord.q < 0 {
        RANK_ORIGIN - coord.r
    } else {
        RANK_ORIGIN + coord.s
    };
    format!("{file}{rank}")
}

/// Cell index named by `name`.
pub fn algebraic_to_cell(name: &str) -> Result<CellIndex, PositionError> {
    let invalid = || PositionError::InvalidCell(name.to_owned());

    let mut chars = name.chars();
    let file = chars.next().filter(|ch| ('a'..='k').contains(ch)).ok_or_else(invalid)?;
    let rank_text = chars.as_str();
    if rank_text.is_empty() || !rank_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let rank: i8 = rank_text.parse().map_err(|_| invalid())?;

    let q = (file as u8 - b'a') as i8 - BOARD_RADIUS;
    let coord = if q < 0 {
        let r = RANK_ORIGIN - rank;
        CubeCoordinate::from_qs(q, -q - r)
    } else {
        CubeCoordinate::from_qs(q, rank - RANK_ORIGIN)
    };
    coord.index().ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_cell, cell_to_algebraic};
    use crate::errors::PositionError;
    use crate::geometry::cube_coordinate::CELL_COUNT;

    #[test]
    fn every_cell_round_trips() {
        for cell in 0..CELL_COUNT {
            let name = cell_to_algebraic(cell);
            assert_eq!(algebraic_to_cell(&name), Ok(cell), "{name}");
        }
    }

    #[test]
    fn known_cells_have_expected_names() {
        assert_eq!(cell_to_algebraic(45), "f6");
        assert_eq!(cell_to_algebraic(30), "b1");
        assert_eq!(cell_to_algebraic(90), "f11");
        assert_eq!(cell_to_algebraic(4), "j1");
    }

    #[test]
    fn off_board_and_malformed_names_fail() {
        for bad in ["", "f", "z3", "a7", "f12", "f0", "f-1", "F6"] {
            assert_eq!(
                algebraic_to_cell(bad),
                Err(PositionError::InvalidCell(bad.to_owned())),
                "{bad}"
            );
        }
    }
}
