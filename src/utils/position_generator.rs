use crate::game_state::chess_types::*;
use crate::geometry::cube_coordinate::GROUP_LENGTHS;
use crate::utils::algebraic::cell_to_algebraic;

pub fn generate_position(board: &BoardState) -> String {
    let cells = generate_cells_field(board);
    let side_to_move = match board.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = match board.en_passant_target() {
        Some(cell) => cell_to_algebraic(cell),
        None => "-".to_owned(),
    };

    format!(
        "{} {} {} {} {}",
        cells,
        side_to_move,
        en_passant,
        board.halfmove_clock(),
        board.fullmove_number()
    )
}

fn generate_cells_field(board: &BoardState) -> String {
    let mut out = String::new();
    let mut first_cell = 0usize;

    for (group, length) in GROUP_LENGTHS.iter().enumerate() {
        let mut empty_count = 0usize;

        for cell in first_cell..first_cell + length {
            match board.piece_at(cell).to_char() {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }
        if group + 1 < GROUP_LENGTHS.len() {
            out.push('/');
        }
        first_cell += length;
    }

    out
}
