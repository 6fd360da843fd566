//! Game state.
//!
//! ## GameState
//!
//! Everything the rules need to resolve the next roll:
//! - Token position per seat
//! - Whose turn it is and the running bonus streak
//! - The winner, once there is one
//!
//! States are plain values. The engine takes a state by reference and hands
//! back a new one, so a rejected roll never leaves a half-applied state
//! behind.

use serde::{Deserialize, Serialize};

use super::config::{HOME, TRACK_END};
use super::error::{LudoError, Result};
use super::player::{PlayerId, PlayerMap, PLAYER_COUNT};

/// Where the game stands between rolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for this player to roll.
    AwaitingRoll(PlayerId),
    /// Terminal: this player reached the goal.
    GameOver(PlayerId),
}

/// Complete game state.
///
/// Deserialized states go through the same checks as `from_positions`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Token position per seat, `HOME..=TRACK_END`.
    pub(crate) positions: PlayerMap<u8>,

    /// Active player (whose turn it is).
    pub(crate) current_turn: PlayerId,

    /// Consecutive sixes in the current turn sequence.
    pub(crate) bonus_roll_streak: u32,

    /// Set once a token reaches the goal.
    pub(crate) winner: Option<PlayerId>,

    /// Turn number (starts at 1, bumped whenever the turn passes).
    pub(crate) turn_number: u32,

    /// Rolls applied so far, blocked and overshooting rolls included.
    pub(crate) rolls_applied: u32,
}

impl GameState {
    /// Fresh game: everyone at home, first seat to roll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: PlayerMap::with_value(HOME),
            current_turn: PlayerId::FIRST,
            bonus_roll_streak: 0,
            winner: None,
            turn_number: 1,
            rolls_applied: 0,
        }
    }

    /// Build a mid-game state, e.g. to set up a position for analysis.
    ///
    /// A position on the goal makes that player the winner. Fails on a seat
    /// outside the board, a position past the goal, or two tokens on the
    /// goal.
    pub fn from_positions(positions: [u8; PLAYER_COUNT], current_turn: PlayerId) -> Result<Self> {
        if PlayerId::new(current_turn.0).is_none() {
            return Err(LudoError::InvalidSeat(current_turn.0));
        }

        let mut winner = None;
        for (player, &position) in PlayerId::all().zip(positions.iter()) {
            if position > TRACK_END || (position == TRACK_END && winner.is_some()) {
                return Err(LudoError::InvalidPosition { player, position });
            }
            if position == TRACK_END {
                winner = Some(player);
            }
        }

        Ok(Self {
            positions: PlayerMap::new(|p| positions[p.index()]),
            current_turn,
            winner,
            ..Self::new()
        })
    }

    /// Set the bonus streak, e.g. to resume mid-turn.
    #[must_use]
    pub fn with_bonus_streak(mut self, streak: u32) -> Self {
        self.bonus_roll_streak = streak;
        self
    }

    // === Read accessors ===

    #[must_use]
    pub fn position_of(&self, player: PlayerId) -> u8 {
        self.positions[player]
    }

    #[must_use]
    pub fn positions(&self) -> &PlayerMap<u8> {
        &self.positions
    }

    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.current_turn
    }

    #[must_use]
    pub fn bonus_roll_streak(&self) -> u32 {
        self.bonus_roll_streak
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn rolls_applied(&self) -> u32 {
        self.rolls_applied
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self.winner {
            Some(winner) => TurnPhase::GameOver(winner),
            None => TurnPhase::AwaitingRoll(self.current_turn),
        }
    }

    /// Is this player's token still at home?
    #[must_use]
    pub fn is_home(&self, player: PlayerId) -> bool {
        self.positions[player] == HOME
    }

    /// Other players standing on `cell`, in seat order. Home is never shared.
    pub fn occupants(&self, cell: u8, except: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.positions
            .iter()
            .filter(move |&(p, &pos)| p != except && pos == cell && cell != HOME)
            .map(|(p, _)| p)
    }
}

/// Wire shape of `GameState`, checked before it becomes one.
#[derive(Deserialize)]
struct RawGameState {
    positions: PlayerMap<u8>,
    current_turn: PlayerId,
    bonus_roll_streak: u32,
    winner: Option<PlayerId>,
    turn_number: u32,
    rolls_applied: u32,
}

impl TryFrom<RawGameState> for GameState {
    type Error = LudoError;

    fn try_from(raw: RawGameState) -> Result<Self> {
        let checked = GameState::from_positions(*raw.positions.values(), raw.current_turn)?;
        if checked.winner != raw.winner {
            return Err(LudoError::WinnerMismatch { recorded: raw.winner });
        }
        Ok(Self {
            bonus_roll_streak: raw.bonus_roll_streak,
            turn_number: raw.turn_number,
            rolls_applied: raw.rolls_applied,
            ..checked
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
