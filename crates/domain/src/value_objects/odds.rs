//! Probability value object for the jackpot roll

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Jackpot probability applied when no profile has been stored yet
pub const DEFAULT_JACKPOT_ODDS: f64 = 0.06;

/// A probability in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Odds(f64);

impl Odds {
    /// Create validated odds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is NaN or outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(DomainError::validation(format!(
                "Odds must be between 0 and 1, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Whether a uniform draw in `[0, 1)` lands inside these odds
    pub fn hits(&self, roll: f64) -> bool {
        roll < self.0
    }
}

impl Default for Odds {
    fn default() -> Self {
        Self(DEFAULT_JACKPOT_ODDS)
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

impl TryFrom<f64> for Odds {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Odds> for f64 {
    fn from(odds: Odds) -> f64 {
        odds.0
    }
}
