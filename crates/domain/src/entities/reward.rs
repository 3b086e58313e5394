//! Reward template - a prize on the roulette wheel

use serde::{Deserialize, Serialize};

/// A prize with a star value that is also paid out as XP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardTemplate {
    pub name: String,
    /// The previous web build stored this as `value`
    #[serde(alias = "value", default)]
    pub star_value: u32,
}

impl RewardTemplate {
    pub fn new(name: impl Into<String>, star_value: u32) -> Self {
        Self {
            name: name.into(),
            star_value,
        }
    }
}
