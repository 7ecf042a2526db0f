//! Python bindings for the Senet engine.
//!
//! Intended for a UI or scripting host that drives one game per object.
//! Rejected requests come back as plain `bool`/`int` results rather than
//! exceptions, matching how a click handler uses them.
//!
//! # Quick Start
//!
//! ```python
//! import senet_engine as senet
//!
//! game = senet.SenetGame(seed=42)
//! throw = game.roll_dice()
//! moves = game.get_valid_moves()
//! if moves:
//!     game.make_move(moves[0])
//! else:
//!     game.pass_turn()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// senet_engine: rules and state for the board game Senet.
#[pymodule]
fn senet_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyMoveRecord>()?;
    m.add_class::<PySenetGame>()?;

    Ok(())
}
