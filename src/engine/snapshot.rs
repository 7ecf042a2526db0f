//! Serializable copy of a game in progress.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameRngState, Player};

/// Everything needed to resume a game exactly, including upcoming throws.
///
/// The move log is not included; persist it separately with
/// `MoveLog::to_bytes` if it is needed after a restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Player,
    /// Pending throw, 0 when none.
    pub dice_value: u8,
    pub game_over: bool,
    pub winner: Option<Player>,
    /// Moves made so far.
    pub move_count: u32,
    /// Dice RNG position.
    pub rng: GameRngState,
}
