//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{LudoError, LudoEvent, PlayerId};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a new player ID (0-3).
    #[new]
    fn new(id: u8) -> PyResult<Self> {
        PlayerId::try_from(id).map(Self).map_err(to_py_err)
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Token colour name.
    #[getter]
    fn color(&self) -> &'static str {
        self.0.color().name()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Rule violations surface as `ValueError` with the engine's message.
pub(crate) fn to_py_err(err: LudoError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Events cross into Python as `(kind, description)` pairs.
pub(crate) fn event_tuple(event: &LudoEvent) -> (&'static str, String) {
    let kind = match event {
        LudoEvent::BlockedAtHome { .. } => "blocked_at_home",
        LudoEvent::Moved { .. } => "moved",
        LudoEvent::Overshoot { .. } => "overshoot",
        LudoEvent::Captured { .. } => "captured",
        LudoEvent::Won { .. } => "won",
        LudoEvent::BonusRoll { .. } => "bonus_roll",
        LudoEvent::TurnPassed { .. } => "turn_passed",
    };
    (kind, event.to_string())
}
