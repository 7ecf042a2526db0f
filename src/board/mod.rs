//! The 30-cell track.
//!
//! - `Occupant`: what sits on a cell (nothing, a Light piece, a Dark piece)
//! - `House`: fixed attribute of a special cell, independent of its occupant
//! - `Board`: the ordered track, at most one piece per cell

pub mod cell;
pub mod track;

pub use cell::{House, Occupant};
pub use track::{
    Board, HOUSE_OF_HAPPINESS, HOUSE_OF_RE_ATUM, HOUSE_OF_THREE_TRUTHS, HOUSE_OF_WATER,
    PIECES_PER_SIDE, SAFE_HOUSE, TRACK_LEN,
};
