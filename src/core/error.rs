//! Error types.
//!
//! Every `EngineError` is an expected, non-fatal rejection: the engine
//! validates a request completely before touching any state, so a returned
//! error always means nothing changed.

use std::path::PathBuf;

use super::player::Player;

/// Rejected game operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no legal move from cell {origin} with a throw of {dice}")]
    InvalidMove { origin: usize, dice: u8 },

    #[error("no dice roll is pending")]
    NoRollPending,

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("a throw of {pending} is still pending")]
    RerollNotAllowed { pending: u8 },
}

/// Rejected custom board position or snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("{player} has {count} pieces on the board (at most {max})")]
    TooManyPieces { player: Player, count: usize, max: usize },

    #[error("board holds no pieces for either side")]
    EmptyBoard,

    #[error("inconsistent game status: {0}")]
    InconsistentStatus(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from encoding or decoding a move log.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("move log codec error: {0}")]
    Codec(#[from] bincode::Error),
}
