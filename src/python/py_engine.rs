//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineConfig, EngineError};
use crate::engine::GameEngine;
use crate::view::BoardView;

use super::py_core::{PyMoveRecord, PyPlayer};

/// Python wrapper for GameEngine.
#[pyclass(name = "SenetGame")]
pub struct PySenetGame {
    engine: GameEngine,
}

#[pymethods]
impl PySenetGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic throws (random if omitted)
    /// - history_limit: Maximum moves kept in `history()`
    #[new]
    #[pyo3(signature = (seed = None, history_limit = None))]
    fn new(seed: Option<u64>, history_limit: Option<usize>) -> PyResult<Self> {
        let config = EngineConfig { seed, history_limit };
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            engine: GameEngine::new(&config),
        })
    }

    /// Throw the sticks.
    ///
    /// Returns the pending throw if one is already outstanding, 0 once the
    /// game is over.
    fn roll_dice(&mut self) -> u8 {
        match self.engine.roll_dice() {
            Ok(value) => value,
            Err(EngineError::RerollNotAllowed { pending }) => pending,
            Err(_) => 0,
        }
    }

    /// Origins with a legal move for the pending throw.
    fn get_valid_moves(&self) -> Vec<usize> {
        self.engine.get_valid_moves().into_vec()
    }

    fn can_move(&self, origin: usize) -> bool {
        self.engine.can_move(origin)
    }

    /// Move the piece on `origin`. Returns False if the move is not legal.
    fn make_move(&mut self, origin: usize) -> bool {
        self.engine.make_move(origin).is_ok()
    }

    /// Hand the turn over. Returns False if no throw is pending.
    fn pass_turn(&mut self) -> bool {
        self.engine.pass_turn().is_ok()
    }

    fn reset(&mut self) {
        self.engine.reset();
    }

    /// Compact cell codes in track order.
    fn get_board(&self) -> Vec<u8> {
        BoardView::from_board(self.engine.board(), &[]).codes()
    }

    /// Moves of the current game, oldest first.
    fn history(&self) -> Vec<PyMoveRecord> {
        self.engine.history().iter().copied().map(PyMoveRecord).collect()
    }

    #[getter]
    fn current_player(&self) -> PyPlayer {
        self.engine.current_player().into()
    }

    #[getter]
    fn dice_value(&self) -> u8 {
        self.engine.dice_value()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.engine.game_over()
    }

    #[getter]
    fn winner(&self) -> Option<PyPlayer> {
        self.engine.winner().map(PyPlayer::from)
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.engine.move_count()
    }

    fn __repr__(&self) -> String {
        let status = match self.engine.winner() {
            Some(p) => format!("won by {p}"),
            None => "ongoing".to_string(),
        };
        format!(
            "SenetGame(turn={}, dice={}, status={})",
            self.engine.current_player(),
            self.engine.dice_value(),
            status
        )
    }
}
