//! Core types: players, dice, state, events, errors, configuration.
//!
//! Nothing here knows the rules. The `rules` module reads and produces these
//! values.

pub mod player;
pub mod dice;
pub mod rng;
pub mod config;
pub mod error;
pub mod event;
pub mod state;

pub use player::{PlayerId, PlayerMap, TokenColor, PLAYER_COUNT};
pub use dice::{DieSource, DieValue, ScriptedDice};
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, OvershootPolicy, EXIT_ROLL, HOME, TRACK_END};
pub use error::{LudoError, Result};
pub use event::{EventList, LudoEvent};
pub use state::{GameState, TurnPhase};
