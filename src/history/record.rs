//! A single logged move.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::rules::{Destination, HouseEffect, MoveOutcome};

/// A successful move with its sequence number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number within the game.
    pub number: u32,

    /// The player who moved.
    pub player: Player,

    /// Cell the piece left.
    pub origin: usize,

    /// Throw consumed by the move.
    pub dice: u8,

    /// Where the throw took the piece.
    pub landing: Destination,

    /// Cell the piece finally occupies; `None` once borne off.
    pub resting: Option<usize>,

    /// Where a captured piece was sent, if the move captured.
    pub captured: Option<usize>,

    pub house_effect: HouseEffect,
}

impl MoveRecord {
    /// Create a record from a move outcome.
    #[must_use]
    pub fn new(number: u32, outcome: &MoveOutcome) -> Self {
        Self {
            number,
            player: outcome.player,
            origin: outcome.origin,
            dice: outcome.dice,
            landing: outcome.landing,
            resting: outcome.resting,
            captured: outcome.captured,
            house_effect: outcome.house_effect,
        }
    }

    #[must_use]
    pub fn is_bear_off(&self) -> bool {
        self.landing == Destination::BorneOff
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Cells are shown 1-based, as on the printed board.
        write!(f, "#{} {}: {} -> ", self.number, self.player, self.origin + 1)?;
        match self.landing {
            Destination::Cell(to) => write!(f, "{}", to + 1)?,
            Destination::BorneOff => write!(f, "off")?,
        }
        write!(f, " (throw {})", self.dice)?;
        if let HouseEffect::SentBack { to } = self.house_effect {
            write!(f, ", sent back to {}", to + 1)?;
        }
        if self.captured.is_some() {
            write!(f, ", capture")?;
        }
        Ok(())
    }
}
