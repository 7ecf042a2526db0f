//! The game session.
//!
//! `GameEngine` owns one game: board, turn, pending throw, result and the
//! move log. Callers drive it through `roll_dice`, `make_move`,
//! `pass_turn` and `reset`, and read everything else through accessors.

pub mod game;
pub mod snapshot;

pub use game::GameEngine;
pub use snapshot::GameSnapshot;
