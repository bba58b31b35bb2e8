//! Incremental board state with reversible move application.
//!
//! `BoardState` owns the cell array, per-type piece sets, king cells, turn and
//! clock metadata, the attack manager, the position hash and the repetition
//! table. Every piece placement and removal runs through one private entry
//! point so all of these stay in lockstep.

use log::trace;

use crate::errors::PositionError;
use crate::game_state::attack_manager::AttackManager;
use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_DRAW_VISITS, STARTING_POSITION};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::geometry::move_tables::{move_tables, MoveTables};
use crate::moves::move_descriptions::{Move, MoveFlag};
use crate::search::repetition_table::RepetitionTable;
use crate::search::zobrist::{compute_zobrist_key, en_passant_key, piece_cell_key, side_to_move_key};
use crate::utils::position_generator::generate_position;
use crate::utils::position_parser::parse_position;

#[derive(Debug)]
pub struct BoardState {
    cells: [Piece; CELL_COUNT],
    // [color][kind], kings excluded
    pieces: [[CellSet; 5]; 2],
    king_cells: [CellIndex; 2],

    side_to_move: Color,
    en_passant_target: Option<CellIndex>,
    halfmove_clock: u16,
    fullmove_number: u16,

    attacks: AttackManager,
    zobrist_key: u64,
    repetitions: RepetitionTable,
    undo_stack: Vec<UndoState>,

    tables: &'static MoveTables,
}

impl BoardState {
    #[inline]
    pub fn new_game() -> Self {
        Self::from_position(STARTING_POSITION).expect("starting position should always parse")
    }

    #[inline]
    pub fn from_position(text: &str) -> Result<Self, PositionError> {
        parse_position(text)
    }

    #[inline]
    pub fn to_position_string(&self) -> String {
        generate_position(self)
    }

    /// Assemble a board from validated parts. The loaded position counts as
    /// its own first visit.
    pub(crate) fn from_parts(
        cells: [Piece; CELL_COUNT],
        side_to_move: Color,
        en_passant_target: Option<CellIndex>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let mut board = Self {
            cells,
            pieces: [[CellSet::EMPTY; 5]; 2],
            king_cells: [0; 2],
            side_to_move,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            attacks: AttackManager::from_cells(&cells),
            zobrist_key: 0,
            repetitions: RepetitionTable::new(),
            undo_stack: Vec::new(),
            tables: move_tables(),
        };
        for (cell, piece) in cells.iter().enumerate() {
            board.index_piece(cell, *piece);
        }
        board.zobrist_key = compute_zobrist_key(&board);
        board.repetitions.add_visit(board.zobrist_key);
        board
    }

    /// Independent scratch copy of `parent`: same position and repetition
    /// counts, attack state rebuilt from scratch, empty undo history.
    pub fn copy_from(parent: &BoardState) -> Self {
        Self {
            cells: parent.cells,
            pieces: parent.pieces,
            king_cells: parent.king_cells,
            side_to_move: parent.side_to_move,
            en_passant_target: parent.en_passant_target,
            halfmove_clock: parent.halfmove_clock,
            fullmove_number: parent.fullmove_number,
            attacks: AttackManager::from_cells(&parent.cells),
            zobrist_key: parent.zobrist_key,
            repetitions: parent.repetitions.clone(),
            undo_stack: Vec::new(),
            tables: parent.tables,
        }
    }

    // --- Queries ---

    #[inline]
    pub fn piece_at(&self, cell: CellIndex) -> Piece {
        self.cells[cell]
    }

    #[inline]
    pub fn cells(&self) -> &[Piece; CELL_COUNT] {
        &self.cells
    }

    /// Cells holding `color`'s pieces of `kind`.
    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> CellSet {
        match kind {
            PieceKind::King => [self.king_cells[color.index()]].into_iter().collect(),
            _ => self.pieces[color.index()][kind.index()],
        }
    }

    /// Every cell holding one of `color`'s pieces, king included.
    pub fn occupied_by(&self, color: Color) -> CellSet {
        self.pieces[color.index()]
            .iter()
            .fold(self.pieces(color, PieceKind::King), |acc, set| acc.union(*set))
    }

    /// Number of `color`'s pieces, king included.
    #[inline]
    pub fn piece_count(&self, color: Color) -> usize {
        self.occupied_by(color).len()
    }

    #[inline]
    pub fn king_cell(&self, color: Color) -> CellIndex {
        self.king_cells[color.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<CellIndex> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn attacks(&self) -> &AttackManager {
        &self.attacks
    }

    #[inline]
    pub fn tables(&self) -> &'static MoveTables {
        self.tables
    }

    #[inline]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    /// Times the current position has been reached, this visit included.
    #[inline]
    pub fn repetition_count(&self) -> u8 {
        self.repetitions.visit_count(self.zobrist_key)
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.undo_stack.last().map(|undo| undo.mv)
    }

    /// True if `color`'s king is attacked.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.attacks.is_attacked(self.king_cell(color), color.opposite())
    }

    // --- Mutation ---

    /// Apply `mv`, which must be legal in this position.
    pub fn make_move(&mut self, mv: Move) {
        let mover_color = self.side_to_move;
        let mut undo = UndoState {
            mv,
            removed: [None, None],
            added: None,
            prev_side_to_move: mover_color,
            prev_en_passant_target: self.en_passant_target,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
            prev_zobrist_key: self.zobrist_key,
        };

        let capture_cell = mv.capture_cell();
        let captured = self.remove_piece(capture_cell);
        if !captured.is_none() {
            undo.removed[0] = Some((capture_cell, captured));
        }

        let mover = self.remove_piece(mv.start());
        undo.removed[1] = Some((mv.start(), mover));

        let placed = match mv.promotion_kind() {
            Some(kind) => Piece::new(mover_color, kind),
            None => mover,
        };
        self.place_piece(mv.destination(), placed);
        undo.added = Some((mv.destination(), placed));

        let next_target = match mv.flag() {
            MoveFlag::DoublePawnPush => mv.aux_cell(),
            _ => None,
        };
        self.set_en_passant_target(next_target);

        if captured.is_none() && !mover.is_kind(PieceKind::Pawn) {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        } else {
            self.halfmove_clock = 0;
        }
        if mover_color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover_color.opposite();
        self.zobrist_key ^= side_to_move_key();

        self.repetitions.add_visit(self.zobrist_key);
        self.undo_stack.push(undo);
        trace!("made {mv}, key {:#018x}", self.zobrist_key);
    }

    /// Revert the most recent `make_move`. Returns the undone move, or `None`
    /// (changing nothing) when there is no history.
    pub fn unmake_move(&mut self) -> Option<Move> {
        let undo = self.undo_stack.pop()?;
        self.repetitions.remove_visit(self.zobrist_key);

        if let Some((cell, _)) = undo.added {
            self.remove_piece(cell);
        }
        for (cell, piece) in undo.removed.iter().rev().flatten() {
            self.place_piece(*cell, *piece);
        }

        self.side_to_move = undo.prev_side_to_move;
        self.en_passant_target = undo.prev_en_passant_target;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
        self.zobrist_key = undo.prev_zobrist_key;

        trace!("unmade {}", undo.mv);
        Some(undo.mv)
    }

    /// Classify the position given the number of legal moves available to
    /// the side to move.
    pub fn update_game_state(&self, legal_move_count: usize) -> GameState {
        let in_check = self.is_in_check(self.side_to_move);
        match (in_check, legal_move_count) {
            (true, 0) => GameState::Checkmate,
            (true, _) => GameState::Check,
            (false, 0) => GameState::Stalemate,
            _ if self.halfmove_clock >= FIFTY_MOVE_HALFMOVES => GameState::Draw,
            _ if self.repetition_count() >= REPETITION_DRAW_VISITS => GameState::ThreefoldRepetitionDraw,
            _ => GameState::Normal,
        }
    }

    fn place_piece(&mut self, cell: CellIndex, piece: Piece) {
        debug_assert!(self.cells[cell].is_none(), "cell {cell} is occupied");
        self.attacks.add_piece(&self.cells, cell, piece);
        self.cells[cell] = piece;
        self.index_piece(cell, piece);
        self.zobrist_key ^= piece_cell_key(piece, cell);
    }

    /// Lift whatever stands on `cell`; returns `Piece::NONE` for an empty cell.
    fn remove_piece(&mut self, cell: CellIndex) -> Piece {
        let piece = self.cells[cell];
        let (Some(color), Some(kind)) = (piece.color(), piece.kind()) else {
            return Piece::NONE;
        };
        self.attacks.remove_piece(&self.cells, cell, piece);
        self.cells[cell] = Piece::NONE;
        if kind != PieceKind::King {
            self.pieces[color.index()][kind.index()].remove(cell);
        }
        self.zobrist_key ^= piece_cell_key(piece, cell);
        piece
    }

    fn index_piece(&mut self, cell: CellIndex, piece: Piece) {
        match (piece.color(), piece.kind()) {
            (Some(color), Some(PieceKind::King)) => self.king_cells[color.index()] = cell,
            (Some(color), Some(kind)) => self.pieces[color.index()][kind.index()].insert(cell),
            _ => {}
        }
    }

    fn set_en_passant_target(&mut self, target: Option<CellIndex>) {
        if let Some(old) = self.en_passant_target {
            self.zobrist_key ^= en_passant_key(old);
        }
        if let Some(new) = target {
            self.zobrist_key ^= en_passant_key(new);
        }
        self.en_passant_target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::BoardState;
    use crate::game_state::attack_manager::AttackManager;
    use crate::game_state::chess_types::{CellSet, Color, Piece, PieceKind, CELL_COUNT};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::get_moves;
    use crate::utils::algebraic::algebraic_to_cell;

    fn cell(name: &str) -> usize {
        algebraic_to_cell(name).expect("test cell should parse")
    }

    fn play(board: &mut BoardState, text: &str) {
        let mv = get_moves(board, false)
            .into_iter()
            .find(|mv| mv.to_string() == text)
            .unwrap_or_else(|| panic!("{text} should be legal"));
        board.make_move(mv);
    }

    fn assert_consistent(board: &BoardState) {
        assert_eq!(board.attacks(), &AttackManager::from_cells(board.cells()));
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                let expected: CellSet = (0..CELL_COUNT)
                    .filter(|c| board.piece_at(*c) == Piece::new(color, kind))
                    .collect();
                assert_eq!(board.pieces(color, kind), expected, "{color:?} {kind:?}");
            }
        }
    }

    #[test]
    fn make_unmake_restores_everything_two_plies_deep() {
        let mut board = BoardState::new_game();
        let start_text = board.to_position_string();
        let start_key = board.zobrist_key();
        let start_attacks = board.attacks().clone();

        for mv in get_moves(&board, false) {
            board.make_move(mv);
            assert_consistent(&board);
            let after_first = board.to_position_string();
            for reply in get_moves(&board, false) {
                board.make_move(reply);
                assert_consistent(&board);
                assert_eq!(board.unmake_move(), Some(reply));
                assert_eq!(board.to_position_string(), after_first);
            }
            assert_eq!(board.unmake_move(), Some(mv));
            assert_eq!(board.to_position_string(), start_text);
            assert_eq!(board.zobrist_key(), start_key);
            assert_eq!(board.attacks(), &start_attacks);
        }
        assert_eq!(board.repetition_count(), 1);
    }

    #[test]
    fn promotions_make_and_unmake_cleanly() {
        let positions = [
            ("6/7/8/9/10/5K5/10/9/8/5P1/k3r1 w - 0 1", Color::White),
            ("1R3K/1p5/8/9/10/5k5/10/9/8/7/6 b - 0 1", Color::Black),
        ];
        for (text, mover) in positions {
            let mut board = BoardState::from_position(text).expect("position should parse");
            let start_key = board.zobrist_key();
            let promotions: Vec<_> = get_moves(&board, false)
                .into_iter()
                .filter(|mv| mv.promotion_kind().is_some())
                .collect();
            assert_eq!(promotions.len(), 8, "{text}");
            assert_eq!(promotions.iter().filter(|mv| mv.is_capture()).count(), 4, "{text}");

            for mv in promotions {
                let kind = mv.promotion_kind().expect("promotion move");
                board.make_move(mv);
                assert_consistent(&board);
                assert_eq!(board.piece_at(mv.destination()), Piece::new(mover, kind), "{mv}");
                assert!(board.pieces(mover, PieceKind::Pawn).is_empty(), "{mv}");
                assert_eq!(board.halfmove_clock(), 0);

                assert_eq!(board.unmake_move(), Some(mv));
                assert_consistent(&board);
                assert_eq!(board.to_position_string(), text);
                assert_eq!(board.zobrist_key(), start_key);
            }
        }
    }

    #[test]
    fn unmake_without_history_is_a_no_op() {
        let mut board = BoardState::new_game();
        assert_eq!(board.unmake_move(), None);
        assert_eq!(board.to_position_string(), BoardState::new_game().to_position_string());
    }

    #[test]
    fn en_passant_removes_the_pushed_pawn() {
        let mut board = BoardState::from_position("1K4/7/8/9/7P2/11/7p2/9/8/6k/6 b - 0 1")
            .expect("position should parse");
        play(&mut board, "h7h5");
        assert_eq!(board.en_passant_target(), Some(cell("h6")));
        assert_eq!(board.to_position_string(), "1K4/7/8/9/6pP2/11/10/9/8/6k/6 w h6 0 2");

        let ep = get_moves(&board, false)
            .into_iter()
            .find(|mv| mv.is_en_passant())
            .expect("en passant should be generated");
        assert_eq!(ep.to_string(), "i5h6");
        assert_eq!(ep.capture_cell(), cell("h5"));

        board.make_move(ep);
        assert_eq!(board.piece_at(cell("h5")), Piece::NONE);
        assert_eq!(board.piece_at(cell("h6")), Piece::new(Color::White, PieceKind::Pawn));
        assert!(board.pieces(Color::Black, PieceKind::Pawn).is_empty());
        assert_eq!(board.en_passant_target(), None);
        assert_consistent(&board);

        board.unmake_move();
        assert_eq!(board.piece_at(cell("h5")), Piece::new(Color::Black, PieceKind::Pawn));
        assert_eq!(board.en_passant_target(), Some(cell("h6")));
    }

    #[test]
    fn clocks_follow_captures_and_pawn_moves() {
        let mut board = BoardState::new_game();
        play(&mut board, "h1i3");
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (1, 1));
        play(&mut board, "h9i6");
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (2, 2));
        play(&mut board, "f5f6");
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (0, 2));
        assert_eq!(board.last_move().map(|mv| mv.to_string()), Some("f5f6".to_owned()));
    }

    #[test]
    fn checkmate_becomes_check_when_a_defence_exists() {
        let mated = BoardState::from_position("5Q/7/8/9/10/11/10/9/5K2/7/5k b - 0 1")
            .expect("position should parse");
        let moves = get_moves(&mated, false);
        assert!(moves.is_empty());
        assert_eq!(mated.update_game_state(moves.len()), GameState::Checkmate);

        let blockable = BoardState::from_position("5Q/3r3/8/9/10/11/10/9/5K2/7/5k b - 0 1")
            .expect("position should parse");
        let moves = get_moves(&blockable, false);
        assert_eq!(moves.iter().map(|mv| mv.to_string()).collect::<Vec<_>>(), vec!["h2h7"]);
        assert_eq!(blockable.update_game_state(moves.len()), GameState::Check);

        let capturable = BoardState::from_position("r4Q/7/8/9/10/11/10/9/5K2/7/5k b - 0 1")
            .expect("position should parse");
        let moves = get_moves(&capturable, false);
        assert_eq!(moves.iter().map(|mv| mv.to_string()).collect::<Vec<_>>(), vec!["f1k1"]);
        assert_eq!(capturable.update_game_state(moves.len()), GameState::Check);
    }

    #[test]
    fn knight_shuffle_reaches_threefold_repetition() {
        let mut board = BoardState::new_game();
        for round in 0..2 {
            for text in ["h1i3", "h9i6", "i3h1", "i6h9"] {
                let moves = get_moves(&board, false);
                assert_eq!(board.update_game_state(moves.len()), GameState::Normal, "round {round}");
                play(&mut board, text);
            }
        }
        assert_eq!(board.repetition_count(), 3);
        let moves = get_moves(&board, false);
        assert_eq!(board.update_game_state(moves.len()), GameState::ThreefoldRepetitionDraw);

        board.unmake_move();
        board.unmake_move();
        board.unmake_move();
        board.unmake_move();
        let moves = get_moves(&board, false);
        assert_eq!(board.update_game_state(moves.len()), GameState::Normal);
        assert_eq!(board.repetition_count(), 2);
    }

    #[test]
    fn fifty_move_rule_draws() {
        let board = BoardState::from_position("6/7/8/9/10/5K5/10/9/8/7/k5 w - 100 80")
            .expect("position should parse");
        let moves = get_moves(&board, false);
        assert_eq!(board.update_game_state(moves.len()), GameState::Draw);
    }

    #[test]
    fn copy_rebuilds_attacks_and_drops_history() {
        let mut board = BoardState::new_game();
        play(&mut board, "f5f6");
        let copy = BoardState::copy_from(&board);
        assert_eq!(copy.history_len(), 0);
        assert_eq!(copy.to_position_string(), board.to_position_string());
        assert_eq!(copy.attacks(), board.attacks());
        assert_eq!(copy.zobrist_key(), board.zobrist_key());
        assert_eq!(copy.repetition_count(), 1);
    }
}
