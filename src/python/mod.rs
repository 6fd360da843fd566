//! Python bindings for the ludo-engine turn engine.
//!
//! # Quick Start
//!
//! ```python
//! import ludo_engine as ludo
//!
//! game = ludo.LudoGame(seed=42)
//! while not game.is_finished():
//!     for kind, text in game.roll():
//!         print(kind, text)
//! print(game.winner())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// ludo-engine: single-lane Ludo rules for scripting and simulation.
#[pymodule]
fn ludo_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyLudoGame>()?;
    Ok(())
}
