//! Hub Service - the use cases behind every button
//!
//! Owns the in-memory [`ChaosHub`], feeds it the platform clock and random
//! source, and writes the hub back to storage after every successful
//! mutation. Failed operations leave both memory and storage untouched.

use chaoshub_domain::{
    catalog, random_caption, ChaosHub, DesignDropId, DomainError, QuestDrawn, RewardSpun,
    TemptationOutcome,
};

use crate::application::services::hub_store::HubStore;
use crate::state::Platform;

/// Application service for the single local hub
pub struct HubService {
    platform: Platform,
    store: HubStore,
    hub: ChaosHub,
}

impl HubService {
    /// Load the hub from the platform's storage
    pub fn load(platform: Platform) -> Self {
        let store = HubStore::new(platform.storage());
        let hub = store.load_hub();
        Self {
            platform,
            store,
            hub,
        }
    }

    /// Read-only view for rendering
    pub fn hub(&self) -> &ChaosHub {
        &self.hub
    }

    /// Draw a random quest and log it
    pub fn draw_quest(&mut self) -> Result<QuestDrawn, DomainError> {
        let today = self.platform.today();
        let now = self.platform.now();
        let platform = &self.platform;
        let drawn = self
            .hub
            .draw_quest(&catalog::QUESTS, today, now, &mut || platform.random_f64())?;

        tracing::info!(
            quest = drawn.quest.label,
            xp = drawn.entry.xp_delta,
            mischief = drawn.entry.mischief_delta,
            streak = self.hub.profile().streak,
            change = ?drawn.streak,
            "Quest drawn"
        );
        self.persist();
        Ok(drawn)
    }

    /// Resist temptation for double XP, or take the weird side quest
    pub fn resolve_temptation(&mut self) -> Result<TemptationOutcome, DomainError> {
        let now = self.platform.now();
        let platform = &self.platform;
        let outcome = match self
            .hub
            .resolve_temptation(now, &mut || platform.random_f64())
        {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(error = %e, "Temptation refused");
                return Err(e);
            }
        };

        match &outcome {
            TemptationOutcome::Resisted { bonus_xp } => {
                tracing::info!(bonus_xp, "Temptation resisted")
            }
            TemptationOutcome::Weird { entry } => tracing::info!(
                xp = entry.xp_delta,
                mischief = entry.mischief_delta,
                "Weird side quest accepted"
            ),
        }
        self.persist();
        Ok(outcome)
    }

    /// Spin the reward roulette
    pub fn spin_reward(&mut self) -> Result<RewardSpun, DomainError> {
        let now = self.platform.now();
        let platform = &self.platform;
        let spun = self.hub.spin_reward(now, &mut || platform.random_f64())?;

        tracing::info!(
            reward = %spun.reward.name,
            stars = spun.reward.star_value,
            jackpot = spun.jackpot,
            "Reward spun"
        );
        self.persist();
        Ok(spun)
    }

    /// A fresh caption. Touches no state.
    pub fn random_caption(&self) -> String {
        random_caption(&mut || self.platform.random_f64())
    }

    /// Queue a design title and return its new id
    pub fn add_design(&mut self, title: &str) -> Result<DesignDropId, DomainError> {
        let now = self.platform.now();
        let id = self.hub.add_design(DesignDropId::new(), title, now)?.id;

        tracing::info!(%id, "Design queued");
        self.persist();
        Ok(id)
    }

    /// Drop a queued design; unknown ids are ignored
    pub fn remove_design(&mut self, id: DesignDropId) -> bool {
        let removed = self.hub.remove_design(id);
        if removed {
            tracing::info!(%id, "Design removed");
            self.persist();
        } else {
            tracing::debug!(%id, "No design with that id");
        }
        removed
    }

    fn persist(&self) {
        if let Err(e) = self.store.save_hub(&self.hub) {
            tracing::error!(key = e.key(), error = %e, "Failed to save hub; keeping in-memory state");
        }
    }
}
