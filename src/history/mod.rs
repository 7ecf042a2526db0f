//! Move history.
//!
//! Every successful move produces a `MoveRecord` numbered from 1 within the
//! current game. `MoveLog` collects them for a history panel or for the
//! caller to persist.

pub mod log;
pub mod record;

pub use log::MoveLog;
pub use record::MoveRecord;
