//! # ludo-engine
//!
//! Rules core for single-lane Ludo: four players, one token each, a shared
//! 56-cell track.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `TurnEngine` takes a state and returns a new state
//!    plus the events that happened. Nothing is mutated in place, so a
//!    rejected roll never leaves a partial update.
//!
//! 2. **Injected randomness**: the engine never rolls on its own. Callers pass
//!    a `DieSource` (seeded `GameRng` in play, `ScriptedDice` in tests).
//!
//! 3. **Events, not effects**: captures, wins and bonus rolls are reported as
//!    `LudoEvent`s. Drawing, sound and animation belong to whoever listens.
//!
//! ## Modules
//!
//! - `core`: players, dice, RNG, state, events, errors, configuration
//! - `rules`: the `TurnEngine`
//! - `session`: a running game with history, replay and headless playouts
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    DieSource, DieValue, EngineConfig, EventList, GameRng, GameRngState, GameState, LudoError,
    LudoEvent, OvershootPolicy, PlayerId, PlayerMap, ScriptedDice, TokenColor, TurnPhase,
    EXIT_ROLL, HOME, PLAYER_COUNT, TRACK_END,
};

pub use crate::rules::{RollOutcome, TurnEngine};

pub use crate::session::{play_out, replay, LudoGame, LudoGameBuilder, PlayoutStats, RollRecord};
