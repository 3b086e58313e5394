//! Profile entity - the persistent progression counters

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use chaoshub_domain::{Odds, StreakChange};

/// Cumulative XP, mischief and daily streak for the single local user.
///
/// All fields default individually so a partially written profile still loads.
/// Counters only ever grow; additions saturate instead of wrapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub mischief: u32,
    #[serde(default)]
    pub streak: u32,
    /// Calendar day of the most recent streak-affecting quest draw
    #[serde(default)]
    pub last_quest_date: Option<NaiveDate>,
    /// Chance that a reward spin lands on the jackpot. Configuration only.
    #[serde(default)]
    pub jackpot_odds: Odds,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jackpot_odds(mut self, odds: Odds) -> Self {
        self.jackpot_odds = odds;
        self
    }

    /// Add XP and mischief
    pub fn award(&mut self, xp: u32, mischief: u32) {
        self.xp = self.xp.saturating_add(xp);
        self.mischief = self.mischief.saturating_add(mischief);
    }

    /// Register a quest drawn on `today` against the streak.
    pub fn record_quest_day(&mut self, today: NaiveDate) -> StreakChange {
        let change = StreakChange::evaluate(self.last_quest_date, today);
        self.streak = change.apply(self.streak);
        if change.touches_date() {
            self.last_quest_date = Some(today);
        }
        change
    }
}
