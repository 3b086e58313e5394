//! ChaosHub aggregate - profile, quest log, reward catalog and design queue
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: counters only move through the operations below
//! - **Injected randomness**: every draw comes from a `FnMut() -> f64` closure
//!   returning values in `[0, 1)`, so tests script exact outcomes
//! - **Injected clock**: callers pass `today` and `now`
//! - **Atomic transitions**: an operation either fails before touching any
//!   state or applies all of its changes
//! - **Outcome values**: mutations return what happened for display

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::catalog::{
    self, CAPTION_BITS, CAPTION_HASHTAGS, WEIRD_SIDE_QUEST, WEIRD_SIDE_QUEST_MISCHIEF,
    WEIRD_SIDE_QUEST_XP,
};
use crate::entities::{DesignDrop, HistoryEntry, Profile, QuestLog, QuestTemplate, RewardTemplate};
use chaoshub_domain::{DesignDropId, DesignTitle, DomainError, StreakChange};

/// Draws below this value resist temptation and double the last award
pub const TEMPTATION_RESIST_BELOW: f64 = 0.5;

/// Result of drawing a quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestDrawn {
    pub quest: QuestTemplate,
    pub entry: HistoryEntry,
    pub streak: StreakChange,
}

/// Result of resolving temptation against the latest history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemptationOutcome {
    /// The latest entry's XP was awarded again. No history entry is written.
    Resisted { bonus_xp: u32 },
    /// The fixed weird side quest was logged and awarded
    Weird { entry: HistoryEntry },
}

impl TemptationOutcome {
    /// Notice shown to the user
    pub fn message(&self) -> String {
        match self {
            Self::Resisted { bonus_xp } => {
                format!("Temptation resisted! Double XP awarded (+{}).", bonus_xp)
            }
            Self::Weird { entry } => format!(
                "You accepted the weird version. +{} XP, +{} mischief. 🌀",
                entry.xp_delta, entry.mischief_delta
            ),
        }
    }
}

/// Result of a reward spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardSpun {
    pub reward: RewardTemplate,
    pub jackpot: bool,
    pub entry: HistoryEntry,
}

/// The whole persisted state of the hub.
///
/// # Invariants
///
/// - `profile.xp` and `profile.mischief` never decrease
/// - `history` is only ever prepended to
/// - `drops` are newest first
#[derive(Debug, Clone, PartialEq)]
pub struct ChaosHub {
    profile: Profile,
    history: QuestLog,
    rewards: Vec<RewardTemplate>,
    drops: Vec<DesignDrop>,
}

impl Default for ChaosHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ChaosHub {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// A fresh hub with an empty profile and the default reward catalog
    pub fn new() -> Self {
        Self {
            profile: Profile::default(),
            history: QuestLog::new(),
            rewards: catalog::default_rewards(),
            drops: Vec::new(),
        }
    }

    /// Rebuild a hub from separately stored parts
    pub fn from_parts(
        profile: Profile,
        history: QuestLog,
        rewards: Vec<RewardTemplate>,
        drops: Vec<DesignDrop>,
    ) -> Self {
        Self {
            profile,
            history,
            rewards,
            drops,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[inline]
    pub fn history(&self) -> &QuestLog {
        &self.history
    }

    #[inline]
    pub fn rewards(&self) -> &[RewardTemplate] {
        &self.rewards
    }

    #[inline]
    pub fn drops(&self) -> &[DesignDrop] {
        &self.drops
    }

    // =========================================================================
    // Progression
    // =========================================================================

    /// Hand out a random quest from `quests`, update the streak for `today`
    /// and log the award.
    ///
    /// # Errors
    ///
    /// `DomainError::EmptyCatalog` when `quests` is empty. Nothing changes.
    pub fn draw_quest(
        &mut self,
        quests: &[QuestTemplate],
        today: NaiveDate,
        now: DateTime<Utc>,
        roll: &mut impl FnMut() -> f64,
    ) -> Result<QuestDrawn, DomainError> {
        let index =
            catalog::pick_index(quests.len(), roll()).ok_or(DomainError::empty_catalog("quest"))?;
        let quest = quests[index];

        let streak = self.profile.record_quest_day(today);
        self.profile.award(quest.xp_reward, quest.mischief_reward);

        let entry = HistoryEntry::new(quest.label, quest.xp_reward, quest.mischief_reward, now);
        self.history.prepend(entry.clone());

        Ok(QuestDrawn {
            quest,
            entry,
            streak,
        })
    }

    /// Double-or-weird on the most recent history entry.
    ///
    /// # Errors
    ///
    /// `DomainError::NoPriorQuest` when the history is empty. Nothing changes.
    pub fn resolve_temptation(
        &mut self,
        now: DateTime<Utc>,
        roll: &mut impl FnMut() -> f64,
    ) -> Result<TemptationOutcome, DomainError> {
        let last_xp = self
            .history
            .latest()
            .map(|entry| entry.xp_delta)
            .ok_or(DomainError::NoPriorQuest)?;

        if roll() < TEMPTATION_RESIST_BELOW {
            self.profile.award(last_xp, 0);
            return Ok(TemptationOutcome::Resisted { bonus_xp: last_xp });
        }

        let entry = HistoryEntry::new(
            WEIRD_SIDE_QUEST,
            WEIRD_SIDE_QUEST_XP,
            WEIRD_SIDE_QUEST_MISCHIEF,
            now,
        );
        self.profile.award(entry.xp_delta, entry.mischief_delta);
        self.history.prepend(entry.clone());
        Ok(TemptationOutcome::Weird { entry })
    }

    /// Spin the reward roulette.
    ///
    /// The first draw decides the jackpot; only a miss consumes a second draw
    /// to pick from the catalog.
    ///
    /// # Errors
    ///
    /// `DomainError::EmptyCatalog` when the jackpot misses and the reward
    /// catalog is empty. Nothing changes.
    pub fn spin_reward(
        &mut self,
        now: DateTime<Utc>,
        roll: &mut impl FnMut() -> f64,
    ) -> Result<RewardSpun, DomainError> {
        let jackpot = self.profile.jackpot_odds.hits(roll());
        let reward = if jackpot {
            catalog::jackpot_reward()
        } else {
            let index = catalog::pick_index(self.rewards.len(), roll())
                .ok_or(DomainError::empty_catalog("reward"))?;
            self.rewards[index].clone()
        };

        let entry = HistoryEntry::new(
            format!("Reward won: {}", reward.name),
            reward.star_value,
            0,
            now,
        );
        self.profile.award(reward.star_value, 0);
        self.history.prepend(entry.clone());

        Ok(RewardSpun {
            reward,
            jackpot,
            entry,
        })
    }

    // =========================================================================
    // Design drops
    // =========================================================================

    /// Queue a design at the front of the list.
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` for a blank title.
    pub fn add_design(
        &mut self,
        id: DesignDropId,
        title: &str,
        now: DateTime<Utc>,
    ) -> Result<&DesignDrop, DomainError> {
        let title = DesignTitle::new(title)?;
        self.drops.insert(0, DesignDrop::new(id, title, now));
        Ok(&self.drops[0])
    }

    /// Remove a queued design. Returns whether anything was removed.
    pub fn remove_design(&mut self, id: DesignDropId) -> bool {
        let before = self.drops.len();
        self.drops.retain(|drop| drop.id != id);
        self.drops.len() != before
    }
}

/// Pick a caption fragment and append the hashtag suffix. Pure.
pub fn random_caption(roll: &mut impl FnMut() -> f64) -> String {
    let index = catalog::pick_index(CAPTION_BITS.len(), roll()).unwrap_or_default();
    format!("{} {}", CAPTION_BITS[index], CAPTION_HASHTAGS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{JACKPOT_NAME, QUESTS};
    use crate::value_objects::Odds;
    use chrono::TimeZone;
    use std::collections::VecDeque;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon(day: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap())
    }

    /// Scripted random source; panics if a test draws more than it scripted.
    fn rolls(values: &[f64]) -> impl FnMut() -> f64 {
        let mut queue: VecDeque<f64> = values.iter().copied().collect();
        move || queue.pop_front().expect("test drew more rolls than scripted")
    }

    fn hub_with_profile(profile: Profile) -> ChaosHub {
        ChaosHub::from_parts(profile, QuestLog::new(), catalog::default_rewards(), vec![])
    }

    const MEME: QuestTemplate = QuestTemplate::new("Send a meme", 8, 2);

    mod draw_quest {
        use super::*;

        #[test]
        fn awards_template_and_logs_entry() {
            let mut hub = ChaosHub::new();
            let today = date(2024, 6, 1);

            let drawn = hub
                .draw_quest(&[MEME], today, noon(today), &mut rolls(&[0.3]))
                .unwrap();

            assert_eq!(drawn.quest, MEME);
            assert_eq!(drawn.streak, StreakChange::Started);
            assert_eq!(hub.profile().xp, 8);
            assert_eq!(hub.profile().mischief, 2);
            assert_eq!(hub.profile().streak, 1);
            assert_eq!(hub.profile().last_quest_date, Some(today));
            assert_eq!(hub.history().len(), 1);
            assert_eq!(hub.history().latest(), Some(&drawn.entry));
            assert_eq!(drawn.entry.label, "Send a meme");
            assert_eq!(drawn.entry.timestamp, noon(today));
        }

        #[test]
        fn picks_uniformly_by_roll() {
            let mut hub = ChaosHub::new();
            let today = date(2024, 6, 1);

            let first = hub
                .draw_quest(&QUESTS, today, noon(today), &mut rolls(&[0.0]))
                .unwrap();
            let last = hub
                .draw_quest(&QUESTS, today, noon(today), &mut rolls(&[0.99]))
                .unwrap();

            assert_eq!(first.quest, QUESTS[0]);
            assert_eq!(last.quest, QUESTS[6]);
        }

        #[test]
        fn same_day_is_idempotent_for_streak() {
            let mut hub = ChaosHub::new();
            let today = date(2024, 6, 1);
            hub.draw_quest(&QUESTS, today, noon(today), &mut rolls(&[0.1]))
                .unwrap();
            let after_first = (hub.profile().streak, hub.profile().last_quest_date);

            let second = hub
                .draw_quest(&QUESTS, today, noon(today), &mut rolls(&[0.8]))
                .unwrap();

            assert_eq!(second.streak, StreakChange::Unchanged);
            assert_eq!(
                (hub.profile().streak, hub.profile().last_quest_date),
                after_first
            );
            assert_eq!(hub.history().len(), 2);
        }

        #[test]
        fn next_day_continues_streak() {
            let day = date(2024, 6, 30);
            let mut hub = hub_with_profile(Profile {
                streak: 4,
                last_quest_date: Some(day),
                ..Profile::default()
            });
            let next = date(2024, 7, 1);

            hub.draw_quest(&QUESTS, next, noon(next), &mut rolls(&[0.5]))
                .unwrap();

            assert_eq!(hub.profile().streak, 5);
            assert_eq!(hub.profile().last_quest_date, Some(next));
        }

        #[test]
        fn gap_resets_streak() {
            let day = date(2024, 12, 30);
            let mut hub = hub_with_profile(Profile {
                streak: 9,
                last_quest_date: Some(day),
                ..Profile::default()
            });
            let later = date(2025, 1, 1);

            hub.draw_quest(&QUESTS, later, noon(later), &mut rolls(&[0.5]))
                .unwrap();

            assert_eq!(hub.profile().streak, 1);
            assert_eq!(hub.profile().last_quest_date, Some(later));
        }

        #[test]
        fn empty_catalog_fails_without_mutation() {
            let mut hub = ChaosHub::new();
            let before = hub.clone();
            let today = date(2024, 6, 1);

            let result = hub.draw_quest(&[], today, noon(today), &mut rolls(&[0.5]));

            assert_eq!(result, Err(DomainError::empty_catalog("quest")));
            assert_eq!(hub, before);
        }
    }

    mod temptation {
        use super::*;

        #[test]
        fn without_history_fails_without_mutation() {
            let mut hub = ChaosHub::new();
            let before = hub.clone();

            let result = hub.resolve_temptation(noon(date(2024, 6, 1)), &mut rolls(&[]));

            assert_eq!(result, Err(DomainError::NoPriorQuest));
            assert_eq!(hub, before);
        }

        #[test]
        fn quest_then_resisted_doubles_xp() {
            let mut hub = ChaosHub::new();
            let today = date(2024, 6, 1);
            hub.draw_quest(&[MEME], today, noon(today), &mut rolls(&[0.0]))
                .unwrap();
            assert_eq!(
                (hub.profile().xp, hub.profile().mischief, hub.profile().streak),
                (8, 2, 1)
            );

            let outcome = hub
                .resolve_temptation(noon(today), &mut rolls(&[0.2]))
                .unwrap();

            assert_eq!(outcome, TemptationOutcome::Resisted { bonus_xp: 8 });
            assert_eq!(outcome.message(), "Temptation resisted! Double XP awarded (+8).");
            assert_eq!(hub.profile().xp, 16);
            assert_eq!(hub.profile().mischief, 2);
            // The web build logs nothing for a resisted temptation
            assert_eq!(hub.history().len(), 1);
        }

        #[test]
        fn weird_branch_logs_fixed_side_quest() {
            let mut hub = ChaosHub::new();
            let today = date(2024, 6, 1);
            hub.draw_quest(&[MEME], today, noon(today), &mut rolls(&[0.0]))
                .unwrap();

            let outcome = hub
                .resolve_temptation(noon(today), &mut rolls(&[0.5]))
                .unwrap();

            let TemptationOutcome::Weird { entry } = &outcome else {
                panic!("expected weird branch, got {outcome:?}");
            };
            assert_eq!(entry.label, WEIRD_SIDE_QUEST);
            assert_eq!((entry.xp_delta, entry.mischief_delta), (5, 3));
            assert_eq!(hub.profile().xp, 13);
            assert_eq!(hub.profile().mischief, 5);
            assert_eq!(hub.history().len(), 2);
            assert_eq!(hub.history().latest(), Some(entry));
            assert_eq!(
                outcome.message(),
                "You accepted the weird version. +5 XP, +3 mischief. 🌀"
            );
        }

        #[test]
        fn does_not_touch_streak() {
            let mut hub = ChaosHub::new();
            let today = date(2024, 6, 1);
            hub.draw_quest(&[MEME], today, noon(today), &mut rolls(&[0.0]))
                .unwrap();
            let streak = hub.profile().streak;

            hub.resolve_temptation(noon(date(2024, 6, 9)), &mut rolls(&[0.9]))
                .unwrap();

            assert_eq!(hub.profile().streak, streak);
            assert_eq!(hub.profile().last_quest_date, Some(today));
        }
    }

    mod spin_reward {
        use super::*;

        #[test]
        fn normal_pick_from_single_entry_catalog() {
            let mut hub = ChaosHub::from_parts(
                Profile::default().with_jackpot_odds(Odds::new(0.0).unwrap()),
                QuestLog::new(),
                vec![RewardTemplate::new("Iced coffee", 1)],
                vec![],
            );

            for n in 1..=20u32 {
                let spun = hub
                    .spin_reward(noon(date(2024, 6, 1)), &mut rolls(&[0.0, 0.7]))
                    .unwrap();
                assert!(!spun.jackpot);
                assert_eq!(spun.reward, RewardTemplate::new("Iced coffee", 1));
                assert!(spun.entry.label.contains("Iced coffee"));
                assert_eq!(hub.profile().xp, n);
                assert_eq!(hub.history().len(), n as usize);
            }
            assert_eq!(
                hub.history().latest().map(|e| e.label.as_str()),
                Some("Reward won: Iced coffee")
            );
        }

        #[test]
        fn zero_odds_never_hits_jackpot() {
            let mut hub =
                hub_with_profile(Profile::default().with_jackpot_odds(Odds::new(0.0).unwrap()));
            for step in 0..50 {
                let r = step as f64 / 50.0;
                let spun = hub
                    .spin_reward(noon(date(2024, 6, 1)), &mut rolls(&[r, r]))
                    .unwrap();
                assert!(!spun.jackpot);
                assert_ne!(spun.reward.name, JACKPOT_NAME);
            }
        }

        #[test]
        fn full_odds_always_hits_jackpot_and_skips_catalog() {
            let mut hub = ChaosHub::from_parts(
                Profile::default().with_jackpot_odds(Odds::new(1.0).unwrap()),
                QuestLog::new(),
                vec![],
                vec![],
            );
            for step in 0..50 {
                let r = step as f64 / 50.0;
                let spun = hub
                    .spin_reward(noon(date(2024, 6, 1)), &mut rolls(&[r]))
                    .unwrap();
                assert!(spun.jackpot);
                assert_eq!(spun.reward.name, JACKPOT_NAME);
                assert_eq!(spun.entry.xp_delta, 8);
                assert_eq!(spun.entry.mischief_delta, 0);
            }
            assert_eq!(hub.profile().xp, 400);
        }

        #[test]
        fn empty_catalog_fails_without_mutation() {
            let mut hub = ChaosHub::from_parts(
                Profile::default().with_jackpot_odds(Odds::new(0.0).unwrap()),
                QuestLog::new(),
                vec![],
                vec![],
            );
            let before = hub.clone();

            let result = hub.spin_reward(noon(date(2024, 6, 1)), &mut rolls(&[0.5, 0.5]));

            assert_eq!(result, Err(DomainError::empty_catalog("reward")));
            assert_eq!(hub, before);
        }
    }

    mod design_drops {
        use super::*;

        #[test]
        fn add_prepends_trimmed_title() {
            let mut hub = ChaosHub::new();
            let now = noon(date(2024, 6, 1));
            let first = DesignDropId::new();
            let second = DesignDropId::new();

            hub.add_design(first, "Moth tee", now).unwrap();
            let added = hub.add_design(second, "  Cryptid mug ", now).unwrap();

            assert_eq!(added.title.as_str(), "Cryptid mug");
            assert_eq!(hub.drops().len(), 2);
            assert_eq!(hub.drops()[0].id, second);
            assert_eq!(hub.drops()[1].id, first);
        }

        #[test]
        fn blank_title_is_rejected() {
            let mut hub = ChaosHub::new();
            let result = hub.add_design(DesignDropId::new(), "   ", noon(date(2024, 6, 1)));
            assert!(matches!(result, Err(DomainError::Validation(_))));
            assert!(hub.drops().is_empty());
        }

        #[test]
        fn long_title_is_accepted() {
            let mut hub = ChaosHub::new();
            let title = "x".repeat(250);
            let added = hub
                .add_design(DesignDropId::new(), &title, noon(date(2024, 6, 1)))
                .unwrap();
            assert_eq!(added.title.as_str(), title);
            assert_eq!(hub.drops().len(), 1);
        }

        #[test]
        fn remove_by_id() {
            let mut hub = ChaosHub::new();
            let now = noon(date(2024, 6, 1));
            let keep = DesignDropId::new();
            let gone = DesignDropId::new();
            hub.add_design(keep, "Keep", now).unwrap();
            hub.add_design(gone, "Gone", now).unwrap();

            assert!(hub.remove_design(gone));
            assert!(!hub.remove_design(gone));
            assert_eq!(hub.drops().len(), 1);
            assert_eq!(hub.drops()[0].id, keep);
        }
    }

    #[test]
    fn xp_and_mischief_never_decrease() {
        let mut hub = ChaosHub::new();
        let mut day = date(2024, 1, 1);
        let script = [0.13, 0.72, 0.41, 0.99, 0.02, 0.57, 0.33, 0.88, 0.64, 0.27];
        let mut source = script.iter().copied().cycle();
        let mut roll = move || source.next().unwrap_or(0.0);

        let mut last = (0, 0);
        for step in 0..60 {
            let _ = match step % 3 {
                0 => hub
                    .draw_quest(&QUESTS, day, noon(day), &mut roll)
                    .map(|_| ()),
                1 => hub.resolve_temptation(noon(day), &mut roll).map(|_| ()),
                _ => hub.spin_reward(noon(day), &mut roll).map(|_| ()),
            };
            let now = (hub.profile().xp, hub.profile().mischief);
            assert!(now.0 >= last.0 && now.1 >= last.1);
            last = now;
            if step % 7 == 0 {
                day = day.succ_opt().unwrap();
            }
        }
    }

    #[test]
    fn caption_uses_fragment_and_hashtags() {
        let caption = random_caption(&mut rolls(&[0.0]));
        assert_eq!(
            caption,
            "🔮 Portals open at inconvenient times. #StrangeDrip #goblincore #cryptid #weirdart #trippy"
        );
        let last = random_caption(&mut rolls(&[0.99]));
        assert!(last.starts_with("✨ Artifact rarity: questionable."));
    }
}
