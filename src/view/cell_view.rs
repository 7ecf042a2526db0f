//! Per-cell render data.

use serde::Serialize;
use smallvec::SmallVec;

use crate::board::{Board, House, Occupant, PIECES_PER_SIDE};
use crate::engine::GameEngine;
use crate::rules::houses;

use super::layout::{display_order, grid_position};

/// Style classes for one cell.
pub type CellClasses = SmallVec<[&'static str; 5]>;

/// Render data for one track cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Track index.
    pub index: usize,
    /// 1-based number printed on the cell.
    pub label: usize,
    pub row: usize,
    pub column: usize,
    pub occupant: Occupant,
    pub house: Option<House>,
    /// Compact code: 0 empty, 1 Light, 2 Dark, 3-7 empty house.
    pub code: u8,
    pub hieroglyph: Option<&'static str>,
    pub piece: Option<&'static str>,
    pub classes: CellClasses,
    pub valid_move: bool,
}

impl CellView {
    fn build(board: &Board, index: usize, valid_move: bool) -> Self {
        let occupant = board[index];
        let house = board.house(index);
        let (row, column) = grid_position(index);

        let mut classes = CellClasses::new();
        classes.push("square");
        if index < PIECES_PER_SIDE {
            classes.push("start-light");
        } else if index < 2 * PIECES_PER_SIDE {
            classes.push("start-dark");
        }
        if let Some(house) = house {
            classes.push(house_class(house));
        }
        match occupant {
            Occupant::Light => classes.push("light-piece"),
            Occupant::Dark => classes.push("dark-piece"),
            Occupant::Empty if house.is_none() => classes.push("empty"),
            Occupant::Empty => {}
        }
        if valid_move {
            classes.push("valid-move");
        }

        Self {
            index,
            label: index + 1,
            row,
            column,
            occupant,
            house,
            code: cell_code(board, index),
            hieroglyph: house.map(hieroglyph),
            piece: piece_glyph(occupant),
            classes,
            valid_move,
        }
    }
}

/// Whole-board render data in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub cells: Vec<CellView>,
}

impl BoardView {
    /// Build the view for the engine's current state, highlighting the
    /// pieces that can use the pending throw.
    #[must_use]
    pub fn from_engine(engine: &GameEngine) -> Self {
        let valid = engine.get_valid_moves();
        Self::from_board(engine.board(), &valid)
    }

    /// Build the view for a bare board.
    #[must_use]
    pub fn from_board(board: &Board, valid_moves: &[usize]) -> Self {
        let cells = display_order()
            .into_iter()
            .map(|index| CellView::build(board, index, valid_moves.contains(&index)))
            .collect();
        Self { cells }
    }

    /// View of a track cell, by track index.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&CellView> {
        self.cells.iter().find(|c| c.index == index)
    }

    /// Compact codes in track order.
    #[must_use]
    pub fn codes(&self) -> Vec<u8> {
        let mut codes: Vec<_> = self.cells.iter().map(|c| (c.index, c.code)).collect();
        codes.sort_unstable_by_key(|&(index, _)| index);
        codes.into_iter().map(|(_, code)| code).collect()
    }
}

/// Compact code for a cell.
#[must_use]
pub fn cell_code(board: &Board, index: usize) -> u8 {
    match board.get(index) {
        Some(Occupant::Light) => 1,
        Some(Occupant::Dark) => 2,
        _ if houses::is_vacant_house(board, index) => match House::at(index) {
            Some(House::SafeHouse) => 3,
            Some(House::Happiness) => 4,
            Some(House::Water) => 5,
            Some(House::ThreeTruths) => 6,
            Some(House::ReAtum) => 7,
            None => 0,
        },
        _ => 0,
    }
}

#[must_use]
pub const fn hieroglyph(house: House) -> &'static str {
    match house {
        House::SafeHouse => "\u{13283}",
        House::Happiness => "\u{13124}",
        House::Water => "\u{13217}",
        House::ThreeTruths => "\u{13079}",
        House::ReAtum => "\u{131F3}",
    }
}

#[must_use]
pub const fn house_class(house: House) -> &'static str {
    match house {
        House::SafeHouse => "safe-house",
        House::Happiness => "house-of-happiness",
        House::Water => "house-of-water",
        House::ThreeTruths => "house-of-three-truths",
        House::ReAtum => "house-of-re-atum",
    }
}

#[must_use]
pub const fn piece_glyph(occupant: Occupant) -> Option<&'static str> {
    match occupant {
        Occupant::Light => Some("\u{25CB}"),
        Occupant::Dark => Some("\u{25CF}"),
        Occupant::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{HOUSE_OF_WATER, SAFE_HOUSE};

    #[test]
    fn test_start_view() {
        let view = BoardView::from_board(&Board::new(), &[]);

        assert_eq!(view.cells.len(), 30);
        assert_eq!(view.cells[10].index, 19);

        let first = view.cell(0).unwrap();
        assert_eq!(first.label, 1);
        assert_eq!(first.code, 1);
        assert_eq!(first.piece, Some("\u{25CB}"));
        assert_eq!(first.classes.as_slice(), &["square", "start-light", "light-piece"]);

        let dark = view.cell(7).unwrap();
        assert_eq!(dark.classes.as_slice(), &["square", "start-dark", "dark-piece"]);

        let plain = view.cell(12).unwrap();
        assert_eq!(plain.classes.as_slice(), &["square", "empty"]);
    }

    #[test]
    fn test_house_cells() {
        let board = Board::with_pieces(&[SAFE_HOUSE], &[]);
        let view = BoardView::from_board(&board, &[SAFE_HOUSE]);

        let safe = view.cell(SAFE_HOUSE).unwrap();
        assert_eq!(safe.code, 1);
        assert_eq!(safe.house, Some(House::SafeHouse));
        assert_eq!(safe.hieroglyph, Some("\u{13283}"));
        assert_eq!(
            safe.classes.as_slice(),
            &["square", "safe-house", "light-piece", "valid-move"]
        );

        let water = view.cell(HOUSE_OF_WATER).unwrap();
        assert_eq!(water.code, 5);
        assert_eq!(water.classes.as_slice(), &["square", "house-of-water"]);
    }

    #[test]
    fn test_codes_in_track_order() {
        let codes = BoardView::from_board(&Board::new(), &[]).codes();

        assert_eq!(&codes[..10], &[1, 1, 1, 1, 1, 2, 2, 2, 2, 2]);
        assert_eq!(codes[SAFE_HOUSE], 3);
        assert_eq!(&codes[25..29], &[4, 5, 6, 7]);
        assert_eq!(codes[29], 0);
    }

    #[test]
    fn test_from_engine_marks_valid_moves() {
        let mut engine = GameEngine::with_seed(3);
        engine.force_dice(3);

        let view = BoardView::from_engine(&engine);
        let marked: Vec<_> = view
            .cells
            .iter()
            .filter(|c| c.valid_move)
            .map(|c| c.index)
            .collect();
        assert_eq!(marked, vec![2, 3, 4]);
    }
}
