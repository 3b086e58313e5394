use dioxus::prelude::*;

use crate::infrastructure::PlayerConfig;
use crate::state::Platform;

pub mod presentation;

use presentation::components::{
    DripDropper, HistoryList, NoticeToast, QuestPanel, RewardRoulette, StatsBar,
};
use presentation::state::HubUiState;

/// Stylesheet compiled into the binary so desktop and web render the same.
pub const HUB_CSS: &str = include_str!("../../assets/hub.css");

/// Window and page title
pub const APP_TITLE: &str = "Chaos Hub";

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let platform = use_platform();
    let config = use_context::<PlayerConfig>();

    // Must be created inside an active Dioxus runtime.
    use_context_provider(move || HubUiState::new(platform.clone(), config.history_limit));

    rsx! {
        style { {HUB_CSS} }
        main {
            h1 { "{APP_TITLE}" }
            StatsBar {}
            QuestPanel {}
            RewardRoulette {}
            DripDropper {}
            HistoryList {}
        }
        NoticeToast {}
    }
}
