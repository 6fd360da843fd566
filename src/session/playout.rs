//! Headless playouts: roll until someone wins or the roll budget runs out.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{LudoEvent, PlayerId, Result};

use super::game::LudoGame;

/// Default roll budget for one playout.
pub const DEFAULT_MAX_ROLLS: u32 = 10_000;

/// Summary of one playout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutStats {
    /// `None` when the roll budget ran out first.
    pub winner: Option<PlayerId>,
    pub rolls: u32,
    pub turns: u32,
    pub captures: u32,
    pub overshoots: u32,
    pub blocked: u32,
}

impl PlayoutStats {
    fn record(&mut self, event: &LudoEvent) {
        match event {
            LudoEvent::Captured { .. } => self.captures += 1,
            LudoEvent::Overshoot { .. } => self.overshoots += 1,
            LudoEvent::BlockedAtHome { .. } => self.blocked += 1,
            LudoEvent::TurnPassed { .. } => self.turns += 1,
            LudoEvent::Won { player } => self.winner = Some(*player),
            LudoEvent::Moved { .. } | LudoEvent::BonusRoll { .. } => {}
        }
    }
}

/// Play `game` forward with its own die.
///
/// `on_event` sees every event in order, which is how a presentation layer
/// follows along. Errors only surface if the game was already over.
pub fn play_out<F>(game: &mut LudoGame, max_rolls: u32, mut on_event: F) -> Result<PlayoutStats>
where
    F: FnMut(&LudoEvent),
{
    let mut stats = PlayoutStats::default();

    while stats.rolls < max_rolls && !game.state().is_finished() {
        let outcome = game.roll()?;
        stats.rolls += 1;
        for event in &outcome.events {
            stats.record(event);
            on_event(event);
        }
    }

    if stats.winner.is_none() {
        debug!("playout stopped after {} rolls without a winner", stats.rolls);
    }
    Ok(stats)
}
