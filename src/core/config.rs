//! Engine configuration and board constants.
//!
//! The board itself is fixed: one shared lane of [`TRACK_END`] cells, a
//! single exit roll, four seats. The only tunable rule is how a six that
//! overshoots the goal interacts with the bonus roll.

use serde::{Deserialize, Serialize};

/// Position of a token that has not yet left home.
pub const HOME: u8 = 0;

/// Final cell of the track. Landing here exactly wins the game.
pub const TRACK_END: u8 = 56;

/// Face needed to leave home; also the face that grants a bonus roll.
pub const EXIT_ROLL: u8 = 6;

/// What happens to the bonus streak when a six overshoots the goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvershootPolicy {
    /// The streak is counted before the move is checked, so the roller keeps
    /// the turn even though the token did not move.
    #[default]
    KeepTurn,
    /// A six that fails to move clears the streak and the turn passes.
    ForfeitTurn,
}

/// Rules configuration carried by a [`TurnEngine`](crate::rules::TurnEngine).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Bonus-streak handling for an overshooting six.
    pub overshoot: OvershootPolicy,
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overshoot policy.
    #[must_use]
    pub fn with_overshoot(mut self, policy: OvershootPolicy) -> Self {
        self.overshoot = policy;
        self
    }
}
