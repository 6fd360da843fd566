//! Game sessions for a presentation layer to drive.
//!
//! - `LudoGame`: engine, state, seeded die and roll history
//! - `replay`: rebuild a state from a recorded history
//! - `play_out`: run a game to completion without input

mod game;
mod playout;

pub use game::{replay, LudoGame, LudoGameBuilder, RollRecord};
pub use playout::{play_out, PlayoutStats, DEFAULT_MAX_ROLLS};
