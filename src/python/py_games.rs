//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{EngineConfig, OvershootPolicy};
use crate::session::{LudoGame, LudoGameBuilder};

use super::py_core::{event_tuple, to_py_err, PyPlayerId};

/// Python wrapper for LudoGame.
#[pyclass(name = "LudoGame")]
pub struct PyLudoGame {
    game: LudoGame,
}

#[pymethods]
impl PyLudoGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - forfeit_on_overshoot: a six that overshoots the goal ends the turn
    #[new]
    #[pyo3(signature = (seed = 42, forfeit_on_overshoot = false))]
    fn new(seed: u64, forfeit_on_overshoot: bool) -> Self {
        let policy = if forfeit_on_overshoot {
            OvershootPolicy::ForfeitTurn
        } else {
            OvershootPolicy::KeepTurn
        };
        let game = LudoGameBuilder::new()
            .config(EngineConfig::new().with_overshoot(policy))
            .build(seed);
        Self { game }
    }

    /// Roll for the current player. Returns the events as (kind, text) pairs.
    fn roll(&mut self) -> PyResult<Vec<(&'static str, String)>> {
        let outcome = self.game.roll().map_err(to_py_err)?;
        Ok(outcome.events.iter().map(event_tuple).collect())
    }

    /// Apply a die value rolled outside the engine.
    fn apply(&mut self, player: &PyPlayerId, value: u8) -> PyResult<Vec<(&'static str, String)>> {
        let outcome = self.game.apply(player.0, value).map_err(to_py_err)?;
        Ok(outcome.events.iter().map(event_tuple).collect())
    }

    /// Token position of a player (0 = home, 56 = goal).
    fn position_of(&self, player: &PyPlayerId) -> u8 {
        self.game.state().position_of(player.0)
    }

    /// All positions in seat order.
    #[getter]
    fn positions(&self) -> Vec<u8> {
        self.game.state().positions().values().to_vec()
    }

    /// Get the player whose turn it is.
    #[getter]
    fn current_turn(&self) -> PyPlayerId {
        PyPlayerId(self.game.state().current_turn())
    }

    #[getter]
    fn bonus_roll_streak(&self) -> u32 {
        self.game.state().bonus_roll_streak()
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.game.state().turn_number()
    }

    fn is_finished(&self) -> bool {
        self.game.state().is_finished()
    }

    fn winner(&self) -> Option<PyPlayerId> {
        self.game.state().winner().map(PyPlayerId)
    }

    /// Copy the game, die included, for simulation.
    fn copy(&self) -> Self {
        Self {
            game: self.game.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let state = self.game.state();
        match state.winner() {
            Some(winner) => format!("LudoGame(winner={winner})"),
            None => format!(
                "LudoGame(turn={}, active={}, positions={:?})",
                state.turn_number(),
                state.current_turn(),
                state.positions().values()
            ),
        }
    }
}
