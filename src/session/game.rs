//! A running game: engine, state, die and roll history in one place.

use serde::{Deserialize, Serialize};

use crate::core::{
    DieValue, EngineConfig, GameRng, GameRngState, GameState, LudoError, PlayerId, Result,
};
use crate::rules::{RollOutcome, TurnEngine};

/// A roll that was applied to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Turn number when the roll was made.
    pub turn_number: u32,
    /// Who rolled.
    pub player: PlayerId,
    /// Face rolled.
    pub value: DieValue,
}

/// One game of Ludo.
///
/// State only changes through the engine. Rejected rolls leave both the
/// state and the history as they were.
#[derive(Clone, Debug)]
pub struct LudoGame {
    engine: TurnEngine,
    start: GameState,
    state: GameState,
    rng: GameRng,
    history: Vec<RollRecord>,
}

/// Builder for creating a LudoGame.
#[derive(Clone, Debug, Default)]
pub struct LudoGameBuilder {
    config: EngineConfig,
    start: Option<GameState>,
}

impl LudoGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from a prepared position instead of a fresh board.
    pub fn start_from(mut self, state: GameState) -> Self {
        self.start = Some(state);
        self
    }

    /// Build the game with a seeded die.
    pub fn build(self, seed: u64) -> LudoGame {
        let start = self.start.unwrap_or_default();
        LudoGame {
            engine: TurnEngine::new(self.config),
            state: start.clone(),
            start,
            rng: GameRng::new(seed),
            history: Vec::new(),
        }
    }
}

impl LudoGame {
    /// Roll the session die for the current player and apply it.
    pub fn roll(&mut self) -> Result<RollOutcome> {
        // Checked first so a finished game does not consume rng state.
        if let Some(winner) = self.state.winner() {
            return Err(LudoError::GameOver { winner });
        }
        let value = self.engine.roll_die(&mut self.rng);
        self.apply(self.state.current_turn(), value.get())
    }

    /// Apply a roll made elsewhere, e.g. a physical die at the table.
    pub fn apply(&mut self, player: PlayerId, value: u8) -> Result<RollOutcome> {
        let turn_number = self.state.turn_number();
        let outcome = self.engine.apply_roll(&self.state, player, value)?;
        self.history.push(RollRecord {
            turn_number,
            player,
            value: DieValue::new(value)?,
        });
        self.state = outcome.state.clone();
        Ok(outcome)
    }

    /// Give up the turn without rolling. No-op while a bonus roll is pending.
    pub fn advance_turn(&mut self) -> Result<&GameState> {
        self.state = self.engine.advance_turn(&self.state)?;
        Ok(&self.state)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Position the game started from; `history` applies on top of it.
    #[must_use]
    pub fn start(&self) -> &GameState {
        &self.start
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Every roll applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RollRecord] {
        &self.history
    }

    /// Checkpoint of the session die.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore the session die from a checkpoint.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }
}

/// Re-apply a recorded history onto `start`.
///
/// Rolls are applied exactly as recorded; a history that breaks turn order
/// fails with the same error the original call would have.
pub fn replay(config: &EngineConfig, start: &GameState, records: &[RollRecord]) -> Result<GameState> {
    let engine = TurnEngine::new(config.clone());
    records.iter().try_fold(start.clone(), |state, record| {
        engine
            .apply_roll(&state, record.player, record.value.get())
            .map(|outcome| outcome.state)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let game = LudoGameBuilder::new().build(42);
        assert_eq!(game.state(), &GameState::new());
        assert!(game.history().is_empty());
        assert_eq!(game.engine().config(), &EngineConfig::default());
    }

    #[test]
    fn test_apply_records_history() {
        let mut game = LudoGameBuilder::new().build(42);
        game.apply(PlayerId(0), 6).unwrap();
        game.apply(PlayerId(0), 4).unwrap();

        let values: Vec<u8> = game.history().iter().map(|r| r.value.get()).collect();
        assert_eq!(values, vec![6, 4]);
        assert_eq!(game.history()[1].turn_number, 1);
        assert_eq!(game.state().current_turn(), PlayerId(1));
    }

    #[test]
    fn test_rejected_roll_is_not_recorded() {
        let mut game = LudoGameBuilder::new().build(42);
        let err = game.apply(PlayerId(2), 3).unwrap_err();
        assert!(matches!(err, LudoError::OutOfTurn { .. }));
        assert!(game.history().is_empty());
        assert_eq!(game.state(), &GameState::new());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = LudoGameBuilder::new().build(7);
        let mut b = LudoGameBuilder::new().build(7);
        for _ in 0..50 {
            assert_eq!(a.roll(), b.roll());
        }
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_rng_checkpoint_restores_rolls() {
        let mut game = LudoGameBuilder::new().build(3);
        for _ in 0..5 {
            game.roll().unwrap();
        }
        let checkpoint = game.rng_state();
        let saved_state = game.state().clone();

        let first = game.roll().unwrap();
        let mut resumed = LudoGameBuilder::new().start_from(saved_state).build(3);
        resumed.restore_rng(&checkpoint);
        assert_eq!(resumed.roll().unwrap(), first);
    }

    #[test]
    fn test_replay_matches_live_game() {
        let mut game = LudoGameBuilder::new().build(11);
        for _ in 0..40 {
            if game.roll().is_err() {
                break;
            }
        }
        let replayed = replay(game.engine().config(), game.start(), game.history()).unwrap();
        assert_eq!(&replayed, game.state());
    }

    #[test]
    fn test_replay_from_prepared_start() {
        let start = GameState::from_positions([40, 0, 0, 0], PlayerId(0)).unwrap();
        let mut game = LudoGameBuilder::new().start_from(start.clone()).build(5);
        game.apply(PlayerId(0), 5).unwrap();
        game.apply(PlayerId(1), 6).unwrap();
        game.apply(PlayerId(1), 2).unwrap();

        assert_eq!(game.start(), &start);
        let replayed = replay(game.engine().config(), game.start(), game.history()).unwrap();
        assert_eq!(&replayed, game.state());
        assert_eq!(replayed.position_of(PlayerId(0)), 45);
        assert_eq!(replayed.position_of(PlayerId(1)), 8);

        // From a fresh board the same history is blocked at home instead.
        let fresh = replay(game.engine().config(), &GameState::new(), game.history()).unwrap();
        assert_ne!(&fresh, game.state());
    }
}
