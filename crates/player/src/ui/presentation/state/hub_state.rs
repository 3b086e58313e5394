//! Hub UI state
//!
//! Wraps the [`HubService`] in a signal and keeps the transient texts the
//! panels show (last quest, wheel label, caption, notice). Every handler
//! calls exactly one service operation.

use dioxus::prelude::*;

use chaoshub_domain::{DesignDrop, DesignDropId, DomainError, HistoryEntry, Profile};

use crate::application::HubService;
use crate::state::Platform;
use crate::ui::presentation::format;

pub const QUEST_PLACEHOLDER: &str = "Press the Chaos Button to get a quest.";
pub const WHEEL_PLACEHOLDER: &str = "?";

/// Signals backing the hub screen
#[derive(Clone, Copy)]
pub struct HubUiState {
    service: Signal<HubService>,
    /// Label of the last drawn quest
    pub quest_text: Signal<String>,
    /// Gain line for the last drawn quest
    pub quest_gain: Signal<String>,
    /// Name shown on the roulette wheel
    pub wheel_text: Signal<String>,
    pub reward_result: Signal<String>,
    pub caption: Signal<String>,
    /// Message replacing the web build's `alert()` popups
    pub notice: Signal<Option<String>>,
    history_limit: usize,
}

impl HubUiState {
    /// Load the hub and create the signals. Must run inside a Dioxus runtime.
    pub fn new(platform: Platform, history_limit: usize) -> Self {
        Self {
            service: Signal::new(HubService::load(platform)),
            quest_text: Signal::new(QUEST_PLACEHOLDER.to_string()),
            quest_gain: Signal::new(String::new()),
            wheel_text: Signal::new(WHEEL_PLACEHOLDER.to_string()),
            reward_result: Signal::new(String::new()),
            caption: Signal::new(String::new()),
            notice: Signal::new(None),
            history_limit,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn profile(&self) -> Profile {
        self.service.read().hub().profile().clone()
    }

    /// Newest entries, up to the configured limit
    pub fn recent_history(&self) -> Vec<HistoryEntry> {
        self.service
            .read()
            .hub()
            .history()
            .recent(self.history_limit)
            .to_vec()
    }

    pub fn drops(&self) -> Vec<DesignDrop> {
        self.service.read().hub().drops().to_vec()
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    pub fn draw_quest(&mut self) {
        let result = self.service.write().draw_quest();
        match result {
            Ok(drawn) => {
                self.quest_text.set(drawn.quest.label.to_string());
                self.quest_gain
                    .set(format::quest_gain(drawn.entry.xp_delta, drawn.entry.mischief_delta));
            }
            Err(e) => self.report(&e),
        }
    }

    pub fn resolve_temptation(&mut self) {
        let result = self.service.write().resolve_temptation();
        match result {
            Ok(outcome) => self.notice.set(Some(outcome.message())),
            Err(e) => self.report(&e),
        }
    }

    pub fn spin_reward(&mut self) {
        let result = self.service.write().spin_reward();
        match result {
            Ok(spun) => {
                self.wheel_text.set(spun.reward.name.clone());
                self.reward_result
                    .set(format::reward_result(&spun.reward.name, spun.reward.star_value));
            }
            Err(e) => self.report(&e),
        }
    }

    pub fn random_caption(&mut self) {
        let caption = self.service.read().random_caption();
        self.caption.set(caption);
    }

    /// Queue a design. Returns whether the title was accepted.
    pub fn add_design(&mut self, title: &str) -> bool {
        let result = self.service.write().add_design(title);
        match result {
            Ok(_) => true,
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    pub fn remove_design(&mut self, id: DesignDropId) {
        self.service.write().remove_design(id);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice.set(None);
    }

    fn report(&mut self, error: &DomainError) {
        match format::notice_for(error) {
            Some(notice) => self.notice.set(Some(notice)),
            None => tracing::debug!(error = %error, "Input ignored"),
        }
    }
}

/// Hook to access the hub state from Dioxus context
pub fn use_hub_state() -> HubUiState {
    use_context::<HubUiState>()
}
