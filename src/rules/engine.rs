//! The turn engine: the complete rule set for a single roll.
//!
//! Resolution order for `apply_roll`:
//! 1. Exit gate: a token at home needs a 6; anything else ends the turn
//! 2. Streak: a 6 extends the bonus streak, anything else clears it
//! 3. Movement: a roll past the goal is an overshoot and the token stays
//! 4. Capture: every other token on the landing cell goes home
//! 5. Commit the new position
//! 6. Win: landing on the goal ends the game
//! 7. Turn: pass it on unless a bonus streak is pending

use log::{debug, info, trace};

use crate::core::{
    DieSource, DieValue, EngineConfig, EventList, GameState, LudoError, LudoEvent, OvershootPolicy,
    PlayerId, Result, EXIT_ROLL, HOME, TRACK_END,
};

/// New state plus everything that happened on the way there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    pub state: GameState,
    pub events: EventList,
}

impl RollOutcome {
    /// Players captured by this roll, in seat order.
    pub fn captured(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.events.iter().filter_map(|e| match *e {
            LudoEvent::Captured { victim, .. } => Some(victim),
            _ => None,
        })
    }

    /// The `(from, to)` cells of the roller's move, if the token moved.
    #[must_use]
    pub fn movement(&self) -> Option<(u8, u8)> {
        self.events.iter().find_map(|e| match *e {
            LudoEvent::Moved { from, to, .. } => Some((from, to)),
            _ => None,
        })
    }
}

/// Stateless rules engine.
///
/// Every operation takes a state by reference and returns a new one. Input
/// states are never modified, so a failed call leaves nothing to roll back.
#[derive(Clone, Debug, Default)]
pub struct TurnEngine {
    config: EngineConfig,
}

impl TurnEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Roll the die. The engine decides nothing here; the caller applies it.
    pub fn roll_die<D: DieSource + ?Sized>(&self, dice: &mut D) -> DieValue {
        dice.roll()
    }

    /// Resolve one roll for `roller`.
    ///
    /// Fails without touching `state` when the game is over, when `roller`
    /// does not hold the turn, or when `value` is not a die face.
    pub fn apply_roll(&self, state: &GameState, roller: PlayerId, value: u8) -> Result<RollOutcome> {
        Self::check_not_finished(state)?;
        if roller != state.current_turn {
            return Err(LudoError::OutOfTurn {
                expected: state.current_turn,
                actual: roller,
            });
        }
        let value = DieValue::new(value)?;

        let mut next = state.clone();
        let mut events = EventList::new();
        next.rolls_applied += 1;
        debug!("{roller} rolls {value} from cell {}", next.positions[roller]);

        let start = next.positions[roller];
        if start == HOME && value.get() != EXIT_ROLL {
            events.push(LudoEvent::BlockedAtHome { player: roller });
            next.bonus_roll_streak = 0;
            events.extend(Self::rotate(&mut next));
            return Ok(Self::finish(next, events));
        }

        if value.is_six() {
            next.bonus_roll_streak += 1;
        } else {
            next.bonus_roll_streak = 0;
        }

        let target = start.saturating_add(value.get());
        if target > TRACK_END {
            events.push(LudoEvent::Overshoot {
                player: roller,
                attempted: target,
            });
            if self.config.overshoot == OvershootPolicy::ForfeitTurn {
                next.bonus_roll_streak = 0;
            }
        } else {
            let victims: Vec<PlayerId> = next.occupants(target, roller).collect();
            for victim in victims {
                next.positions[victim] = HOME;
                events.push(LudoEvent::Captured {
                    victim,
                    by: roller,
                    at_cell: target,
                });
            }

            next.positions[roller] = target;
            events.push(LudoEvent::Moved {
                player: roller,
                from: start,
                to: target,
            });

            if target == TRACK_END {
                info!("{roller} reaches cell {TRACK_END} and wins");
                next.winner = Some(roller);
                events.push(LudoEvent::Won { player: roller });
                return Ok(Self::finish(next, events));
            }
        }

        if next.bonus_roll_streak > 0 {
            events.push(LudoEvent::BonusRoll {
                player: roller,
                streak: next.bonus_roll_streak,
            });
        } else {
            events.extend(Self::rotate(&mut next));
        }

        Ok(Self::finish(next, events))
    }

    /// Hand the turn to the next seat.
    ///
    /// A pending bonus streak keeps the turn where it is and returns the
    /// state unchanged.
    pub fn advance_turn(&self, state: &GameState) -> Result<GameState> {
        Self::check_not_finished(state)?;
        let mut next = state.clone();
        Self::rotate(&mut next);
        Ok(next)
    }

    /// Move the turn on unless a bonus roll is pending. Returns the
    /// `TurnPassed` event when the turn moved.
    fn rotate(state: &mut GameState) -> Option<LudoEvent> {
        if state.bonus_roll_streak > 0 {
            return None;
        }
        let from = state.current_turn;
        let to = from.next();
        state.current_turn = to;
        state.turn_number += 1;
        Some(LudoEvent::TurnPassed { from, to })
    }

    fn check_not_finished(state: &GameState) -> Result<()> {
        match state.winner {
            Some(winner) => Err(LudoError::GameOver { winner }),
            None => Ok(()),
        }
    }

    fn finish(state: GameState, events: EventList) -> RollOutcome {
        for event in &events {
            trace!("{event}");
        }
        RollOutcome { state, events }
    }
}
