//! Rules of single-lane Ludo.
//!
//! `TurnEngine` is the only place positions, streaks and turns change. It is
//! a set of pure state transitions: state in, new state and events out.

pub mod engine;

pub use engine::{RollOutcome, TurnEngine};
