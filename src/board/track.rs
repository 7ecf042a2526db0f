//! Board representation.
//!
//! The track is a single line of cells indexed 0..30. Light starts on
//! cells 0-4, Dark on cells 5-9. A piece that moves past the last cell is
//! borne off and no longer appears on the board.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::cell::{House, Occupant};
use crate::core::Player;

/// Number of cells on the track.
pub const TRACK_LEN: usize = 30;

/// Pieces each side owns.
pub const PIECES_PER_SIDE: usize = 5;

pub const SAFE_HOUSE: usize = 14;
pub const HOUSE_OF_HAPPINESS: usize = 25;
pub const HOUSE_OF_WATER: usize = 26;
pub const HOUSE_OF_THREE_TRUTHS: usize = 27;
pub const HOUSE_OF_RE_ATUM: usize = 28;

/// The track: one occupant per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Occupant; TRACK_LEN],
}

impl Board {
    /// Board in the starting layout.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [Occupant::Empty; TRACK_LEN];
        for (i, cell) in cells.iter_mut().enumerate().take(2 * PIECES_PER_SIDE) {
            *cell = if i < PIECES_PER_SIDE {
                Occupant::Light
            } else {
                Occupant::Dark
            };
        }
        Self { cells }
    }

    /// Board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [Occupant::Empty; TRACK_LEN],
        }
    }

    /// Board from an explicit cell array.
    #[must_use]
    pub fn from_cells(cells: [Occupant; TRACK_LEN]) -> Self {
        Self { cells }
    }

    /// Board with pieces on the listed cells and every other cell empty.
    ///
    /// Later entries overwrite earlier ones for the same cell. Indices
    /// off the track are ignored.
    #[must_use]
    pub fn with_pieces(light: &[usize], dark: &[usize]) -> Self {
        let mut board = Self::empty();
        for &i in light {
            board.place(i, Occupant::Light);
        }
        for &i in dark {
            board.place(i, Occupant::Dark);
        }
        board
    }

    /// Occupant at `index`, or `None` off the track.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Occupant> {
        self.cells.get(index).copied()
    }

    /// House attribute at `index`.
    #[must_use]
    pub fn house(&self, index: usize) -> Option<House> {
        House::at(index)
    }

    /// Pieces `player` still has on the track.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(player)).count()
    }

    /// Cells holding `player`'s pieces, in track order.
    pub fn positions(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.is_owned_by(player))
            .map(|(i, _)| i)
    }

    /// First cell of `player`'s starting area.
    #[must_use]
    pub fn home_start(player: Player) -> usize {
        match player {
            Player::Light => 0,
            Player::Dark => PIECES_PER_SIDE,
        }
    }

    /// Lowest-index empty cell at or after `start`.
    #[must_use]
    pub fn first_empty_from(&self, start: usize) -> Option<usize> {
        self.cells
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    pub fn iter(&self) -> impl Iterator<Item = Occupant> + '_ {
        self.cells.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Occupant] {
        &self.cells
    }

    /// Set a cell. Out-of-range indices are ignored.
    pub(crate) fn place(&mut self, index: usize, occupant: Occupant) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = occupant;
        }
    }

    /// Empty a cell and return what was there.
    pub(crate) fn take(&mut self, index: usize) -> Occupant {
        self.cells
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Board {
    type Output = Occupant;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            let c = match cell {
                Occupant::Empty => '.',
                Occupant::Light => 'L',
                Occupant::Dark => 'D',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
