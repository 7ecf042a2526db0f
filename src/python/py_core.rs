//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::Player;
use crate::history::MoveRecord;

/// Python wrapper for Player.
#[pyclass(name = "Player", eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyPlayer {
    Light,
    Dark,
}

impl From<Player> for PyPlayer {
    fn from(player: Player) -> Self {
        match player {
            Player::Light => PyPlayer::Light,
            Player::Dark => PyPlayer::Dark,
        }
    }
}

/// Python wrapper for MoveRecord.
#[pyclass(name = "MoveRecord")]
#[derive(Clone, Debug)]
pub struct PyMoveRecord(pub MoveRecord);

#[pymethods]
impl PyMoveRecord {
    /// 1-based move number.
    #[getter]
    fn number(&self) -> u32 {
        self.0.number
    }

    #[getter]
    fn player(&self) -> PyPlayer {
        self.0.player.into()
    }

    #[getter]
    fn square_from(&self) -> usize {
        self.0.origin
    }

    /// Landing cell, or None when the piece was borne off.
    #[getter]
    fn square_to(&self) -> Option<usize> {
        self.0.landing.cell()
    }

    #[getter]
    fn resting(&self) -> Option<usize> {
        self.0.resting
    }

    #[getter]
    fn dice_value(&self) -> u8 {
        self.0.dice
    }

    #[getter]
    fn captured(&self) -> bool {
        self.0.captured.is_some()
    }

    fn __repr__(&self) -> String {
        format!("MoveRecord({})", self.0)
    }
}
