//! Rules of play.
//!
//! The engine calls into `RulesEngine` and never interprets cells,
//! houses or captures directly:
//! - `moves`: destinations and legal-move generation
//! - `houses`: what the special cells do to a landing piece
//! - `senet`: the fixed ruleset, `SenetRules`

pub mod engine;
pub mod houses;
pub mod moves;
pub mod senet;

pub use engine::RulesEngine;
pub use houses::HouseEffect;
pub use moves::{Destination, MoveOutcome, ValidMoves};
pub use senet::SenetRules;
