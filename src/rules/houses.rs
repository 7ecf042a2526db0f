//! Special-cell behaviour.
//!
//! | Cell | House             | Effect                                             |
//! |------|-------------------|----------------------------------------------------|
//! | 14   | Safe House        | Occupant cannot be captured or landed on            |
//! | 25   | Happiness         | None                                               |
//! | 26   | Water             | Must be empty to enter; lander returns to its start |
//! | 27   | Three Truths      | None                                               |
//! | 28   | Re-Atum           | None                                               |
//!
//! A piece leaving the House of Water goes to the first empty cell at or
//! after its side's starting area: cell 0 for Light, cell 5 for Dark.
//!
//! The Safe House check lives in move generation since it depends on who
//! is moving. Passing over any house is always allowed.

use serde::{Deserialize, Serialize};

use crate::board::{Board, House, Occupant};

/// What a house did to the piece that landed on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseEffect {
    #[default]
    None,
    /// Landed on the House of Water and was moved back to `to`.
    SentBack { to: usize },
}

/// Is landing on `to` forbidden regardless of who is moving?
#[must_use]
pub fn landing_blocked(board: &Board, to: usize) -> bool {
    match House::at(to) {
        Some(House::Water) => !board[to].is_empty(),
        _ => false,
    }
}

/// Apply the effect of the house at `to` to the piece that just landed.
pub(crate) fn resolve_landing(board: &mut Board, to: usize) -> HouseEffect {
    match House::at(to) {
        Some(House::Water) => {
            let piece = board.take(to);
            let start = piece.player().map_or(0, Board::home_start);
            match board.first_empty_from(start) {
                Some(cell) => {
                    board.place(cell, piece);
                    HouseEffect::SentBack { to: cell }
                }
                None => {
                    board.place(to, piece);
                    HouseEffect::None
                }
            }
        }
        _ => HouseEffect::None,
    }
}

/// Cell the piece rests on after `effect`.
#[must_use]
pub fn resting_cell(landed: usize, effect: HouseEffect) -> usize {
    match effect {
        HouseEffect::None => landed,
        HouseEffect::SentBack { to } => to,
    }
}

/// True if a house exists at `index` and it is currently empty.
#[must_use]
pub fn is_vacant_house(board: &Board, index: usize) -> bool {
    House::at(index).is_some() && board.get(index) == Some(Occupant::Empty)
}
