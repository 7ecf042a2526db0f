//! Destinations and legal-move generation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, PIECES_PER_SIDE, SAFE_HOUSE, TRACK_LEN};
use crate::core::Player;

use super::houses::{self, HouseEffect};

/// Origin cells with a legal move.
///
/// A side never has more than five pieces, so this never spills to the heap.
pub type ValidMoves = SmallVec<[usize; PIECES_PER_SIDE]>;

/// Where a move ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// A cell on the track.
    Cell(usize),
    /// Past the last cell; the piece leaves the board.
    BorneOff,
}

impl Destination {
    /// Destination of a piece on `origin` moving `dice` steps.
    #[must_use]
    pub fn from_move(origin: usize, dice: u8) -> Self {
        let target = origin + usize::from(dice);
        if target >= TRACK_LEN {
            Destination::BorneOff
        } else {
            Destination::Cell(target)
        }
    }

    #[must_use]
    pub fn cell(self) -> Option<usize> {
        match self {
            Destination::Cell(i) => Some(i),
            Destination::BorneOff => None,
        }
    }
}

/// Everything a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Player who moved.
    pub player: Player,
    /// Cell the piece left.
    pub origin: usize,
    /// Throw consumed.
    pub dice: u8,
    /// Where the throw took the piece.
    pub landing: Destination,
    /// Cell the piece ended on after house effects. `None` if borne off.
    pub resting: Option<usize>,
    /// Cell a captured opposing piece was sent to (always `origin`).
    pub captured: Option<usize>,
    pub house_effect: HouseEffect,
}

impl MoveOutcome {
    #[must_use]
    pub fn is_bear_off(&self) -> bool {
        self.landing == Destination::BorneOff
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Can `player`'s piece on `origin` move `dice` steps?
///
/// A move is legal when the origin holds the player's own piece, a throw
/// is pending, and the destination is either off the track or a cell that
/// is not held by the player and not barred by a house.
#[must_use]
pub fn is_legal(board: &Board, player: Player, origin: usize, dice: u8) -> bool {
    if dice == 0 {
        return false;
    }
    match board.get(origin) {
        Some(occupant) if occupant.is_owned_by(player) => {}
        _ => return false,
    }

    match Destination::from_move(origin, dice) {
        Destination::BorneOff => true,
        Destination::Cell(to) => {
            let target = board[to];
            if target.is_owned_by(player) {
                return false;
            }
            if to == SAFE_HOUSE && target.is_owned_by(player.opponent()) {
                return false;
            }
            !houses::landing_blocked(board, to)
        }
    }
}

/// Origins of every legal move for `player` with a throw of `dice`.
#[must_use]
pub fn valid_moves(board: &Board, player: Player, dice: u8) -> ValidMoves {
    if dice == 0 {
        return ValidMoves::new();
    }
    board
        .positions(player)
        .filter(|&origin| is_legal(board, player, origin, dice))
        .collect()
}
