//! UI state held in Dioxus signals

mod hub_state;

pub use hub_state::{use_hub_state, HubUiState, QUEST_PLACEHOLDER, WHEEL_PLACEHOLDER};
