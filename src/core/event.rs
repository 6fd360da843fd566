//! Domain events emitted by the engine.
//!
//! Events are informational only. A presentation layer consumes them to move
//! tokens on screen, play sounds or disable input; the engine never waits on
//! them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// Something that happened while a roll was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LudoEvent {
    /// The roller is at home and did not roll the exit face.
    BlockedAtHome { player: PlayerId },

    /// The roller's token moved. `from` and `to` drive move animation.
    Moved { player: PlayerId, from: u8, to: u8 },

    /// The roll would have carried the token past the goal.
    Overshoot { player: PlayerId, attempted: u8 },

    /// Another player's token was on the landing cell and went home.
    Captured { victim: PlayerId, by: PlayerId, at_cell: u8 },

    /// The roller reached the goal.
    Won { player: PlayerId },

    /// The roller keeps the turn after a six.
    BonusRoll { player: PlayerId, streak: u32 },

    /// The turn moved on.
    TurnPassed { from: PlayerId, to: PlayerId },
}

/// Events of a single roll. Almost always four or fewer.
pub type EventList = SmallVec<[LudoEvent; 4]>;

impl std::fmt::Display for LudoEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            LudoEvent::BlockedAtHome { player } => write!(f, "{player} needs a 6 to leave home"),
            LudoEvent::Moved { player, from, to } => write!(f, "{player} moves {from} -> {to}"),
            LudoEvent::Overshoot { player, attempted } => {
                write!(f, "{player} overshoots to {attempted} and stays put")
            }
            LudoEvent::Captured { victim, by, at_cell } => {
                write!(f, "{by} captures {victim} on cell {at_cell}")
            }
            LudoEvent::Won { player } => write!(f, "{player} wins"),
            LudoEvent::BonusRoll { player, streak } => {
                write!(f, "{player} rolled a 6 and rolls again (streak {streak})")
            }
            LudoEvent::TurnPassed { from, to } => write!(f, "turn passes from {from} to {to}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let event = LudoEvent::Captured {
            victim: PlayerId(1),
            by: PlayerId(0),
            at_cell: 13,
        };
        assert_eq!(event.to_string(), "Player 1 captures Player 2 on cell 13");

        let event = LudoEvent::BlockedAtHome { player: PlayerId(3) };
        assert_eq!(event.to_string(), "Player 4 needs a 6 to leave home");
    }

    #[test]
    fn test_serde_tagging() {
        let event = LudoEvent::Moved {
            player: PlayerId(0),
            from: 0,
            to: 6,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"kind":"moved","player":0,"from":0,"to":6}"#);

        let back: LudoEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
