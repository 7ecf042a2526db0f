//! # senet-engine
//!
//! Rules and state machine for Senet, the ancient Egyptian race game.
//!
//! ## Game
//!
//! Two players race five pieces each along a 30-cell track. A throw of the
//! sticks moves one piece forward; landing on a lone opposing piece swaps
//! it back to where the mover came from; moving past the last cell bears a
//! piece off. The first side to bear off all five pieces wins.
//!
//! ## Design Principles
//!
//! 1. **One owned value per game**: `GameEngine` holds every piece of
//!    state. There is no global game; hosts create, drive and drop engines.
//!
//! 2. **Rejections are values**: every refused request returns an
//!    `EngineError` and leaves the engine untouched.
//!
//! 3. **Views are derived**: glyphs, style classes and layout live in
//!    `view` and are recomputed from the board, never stored.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `board`: Track, occupants and special houses
//! - `dice`: Throwing-stick distribution
//! - `rules`: `RulesEngine` trait and the Senet ruleset
//! - `engine`: `GameEngine` and snapshots
//! - `history`: Move records and the move log
//! - `view`: Render data for a presentation layer

pub mod core;
pub mod board;
pub mod dice;
pub mod rules;
pub mod engine;
pub mod history;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Player,
    GameRng, GameRngState,
    EngineConfig,
    EngineError, PositionError, ConfigError, HistoryError,
};

pub use crate::board::{Board, House, Occupant, PIECES_PER_SIDE, SAFE_HOUSE, TRACK_LEN};

pub use crate::dice::Dice;

pub use crate::rules::{Destination, HouseEffect, MoveOutcome, RulesEngine, SenetRules, ValidMoves};

pub use crate::engine::{GameEngine, GameSnapshot};

pub use crate::history::{MoveLog, MoveRecord};

pub use crate::view::{BoardView, CellView};
