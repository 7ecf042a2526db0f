//! Rules engine trait.
//!
//! A ruleset defines:
//! - Which pieces may move for a given throw
//! - How a move changes the board
//! - When the game is won
//! - Whether a throw earns another throw

use crate::board::Board;
use crate::core::{EngineError, Player};

use super::moves::{MoveOutcome, ValidMoves};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `valid_moves`: Return empty when `dice` is 0 or nothing can move
/// - `apply_move`: Validate fully before mutating; an `Err` must leave
///   the board untouched
/// - `winner`: Return `None` while the game continues
pub trait RulesEngine {
    /// Origin cells of `player`'s pieces that can move `dice` steps.
    fn valid_moves(&self, board: &Board, player: Player, dice: u8) -> ValidMoves;

    /// Move the piece on `origin` by `dice` steps.
    fn apply_move(
        &self,
        board: &mut Board,
        player: Player,
        origin: usize,
        dice: u8,
    ) -> Result<MoveOutcome, EngineError>;

    /// The player who has borne off every piece, if any.
    fn winner(&self, board: &Board) -> Option<Player>;

    /// Does consuming this throw keep the turn with the mover?
    fn grants_extra_turn(&self, _dice: u8) -> bool {
        false
    }

    // === Convenience Methods ===

    /// Can the piece on `origin` move `dice` steps?
    fn is_valid_move(&self, board: &Board, player: Player, origin: usize, dice: u8) -> bool {
        self.valid_moves(board, player, dice).contains(&origin)
    }
}
