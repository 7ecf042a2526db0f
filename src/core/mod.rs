//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the board, the rules and
//! the engine. Nothing in here knows how Senet is played.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use error::{ConfigError, EngineError, HistoryError, PositionError};
