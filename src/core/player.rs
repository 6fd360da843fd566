//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the four seats at the board. Seat order is
//! turn order.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::LudoError;

/// Number of seats at the board.
pub const PLAYER_COUNT: usize = 4;

/// Seat identifier.
///
/// Indices are 0-based: the first player is `PlayerId(0)`. Display is
/// 1-based ("Player 1") to match what is shown at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Returns `None` for an index outside the four seats.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < PLAYER_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// The first seat, which opens the game.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one in rotation, wrapping from the last to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(((self.0 as usize + 1) % PLAYER_COUNT) as u8)
    }

    /// Token colour of this seat.
    #[must_use]
    pub const fn color(self) -> TokenColor {
        TokenColor::ALL[self.0 as usize % PLAYER_COUNT]
    }

    /// Iterate over all seats in turn order.
    ///
    /// ```
    /// use ludo_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::FIRST);
    /// assert_eq!(players[3].next(), PlayerId::FIRST);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = LudoError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(LudoError::InvalidSeat(id))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Token colour per seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl TokenColor {
    /// Colours in seat order.
    pub const ALL: [TokenColor; PLAYER_COUNT] =
        [TokenColor::Red, TokenColor::Blue, TokenColor::Green, TokenColor::Yellow];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TokenColor::Red => "red",
            TokenColor::Blue => "blue",
            TokenColor::Green => "green",
            TokenColor::Yellow => "yellow",
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{PlayerId, PlayerMap};
///
/// let mut positions: PlayerMap<u8> = PlayerMap::with_value(0);
/// positions[PlayerId::FIRST.next()] = 13;
/// assert_eq!(positions[PlayerId::FIRST], 0);
/// assert_eq!(positions[PlayerId::FIRST.next()], 13);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Raw values in seat order.
    #[must_use]
    pub fn values(&self) -> &[T; PLAYER_COUNT] {
        &self.data
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
