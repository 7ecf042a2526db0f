//! Cell contents and special-cell attributes.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// What occupies a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Light,
    Dark,
}

impl Occupant {
    /// The owning player, if a piece is present.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Light => Some(Player::Light),
            Occupant::Dark => Some(Player::Dark),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// True if this cell holds one of `player`'s pieces.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.player() == Some(player)
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        match player {
            Player::Light => Occupant::Light,
            Player::Dark => Occupant::Dark,
        }
    }
}

/// Named special cells. A house is a property of the cell index and
/// holds whatever occupant the cell currently has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum House {
    /// Cell 14. Its occupant cannot be captured or landed on by the opponent.
    SafeHouse,
    /// Cell 25.
    Happiness,
    /// Cell 26. A piece landing here is sent back toward the start.
    Water,
    /// Cell 27.
    ThreeTruths,
    /// Cell 28.
    ReAtum,
}

impl House {
    pub const ALL: [House; 5] = [
        House::SafeHouse,
        House::Happiness,
        House::Water,
        House::ThreeTruths,
        House::ReAtum,
    ];

    /// The house at a cell index, if any.
    #[must_use]
    pub const fn at(index: usize) -> Option<House> {
        match index {
            14 => Some(House::SafeHouse),
            25 => Some(House::Happiness),
            26 => Some(House::Water),
            27 => Some(House::ThreeTruths),
            28 => Some(House::ReAtum),
            _ => None,
        }
    }

    /// The cell index of this house.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            House::SafeHouse => 14,
            House::Happiness => 25,
            House::Water => 26,
            House::ThreeTruths => 27,
            House::ReAtum => 28,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            House::SafeHouse => "Safe House",
            House::Happiness => "House of Happiness",
            House::Water => "House of Water",
            House::ThreeTruths => "House of Three Truths",
            House::ReAtum => "House of Re-Atum",
        }
    }
}

impl std::fmt::Display for House {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
