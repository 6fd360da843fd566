//! Die values and the sources that produce them.
//!
//! The engine never draws randomness on its own. Callers hand it a
//! [`DieSource`]: a seeded [`GameRng`](super::GameRng) in play, or
//! [`ScriptedDice`] when a test or replay needs exact values.

use serde::{Deserialize, Serialize};

use super::error::{LudoError, Result};

/// A single face of a six-sided die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieValue(u8);

impl DieValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// The face that lets a token leave home and grants a bonus roll.
    pub const SIX: DieValue = DieValue(6);

    /// Every face, lowest first.
    pub const ALL: [DieValue; 6] = [
        DieValue(1),
        DieValue(2),
        DieValue(3),
        DieValue(4),
        DieValue(5),
        DieValue(6),
    ];

    /// Validate a raw face value.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LudoError::InvalidDieValue(value))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_six(self) -> bool {
        self.0 == 6
    }
}

impl TryFrom<u8> for DieValue {
    type Error = LudoError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DieValue> for u8 {
    fn from(value: DieValue) -> u8 {
        value.0
    }
}

impl std::fmt::Display for DieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that can roll a six-sided die.
pub trait DieSource {
    /// Roll once. Values are uniform in 1..=6 for random sources.
    fn roll(&mut self) -> DieValue;
}

impl<D: DieSource + ?Sized> DieSource for &mut D {
    fn roll(&mut self) -> DieValue {
        (**self).roll()
    }
}

/// A die that replays a fixed sequence, cycling when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    values: Vec<DieValue>,
    cursor: usize,
}

impl ScriptedDice {
    /// Build from raw faces.
    ///
    /// Fails on the first value outside 1..=6. An empty script has nothing
    /// to cycle through and is rejected as `InvalidDieValue(0)`.
    pub fn new(values: &[u8]) -> Result<Self> {
        if values.is_empty() {
            return Err(LudoError::InvalidDieValue(0));
        }
        let values = values
            .iter()
            .map(|&v| DieValue::new(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { values, cursor: 0 })
    }

    /// Number of rolls made so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DieSource for ScriptedDice {
    fn roll(&mut self) -> DieValue {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
