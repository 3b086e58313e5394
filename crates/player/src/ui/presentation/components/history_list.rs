//! Recent quest log

use dioxus::prelude::*;

use crate::ui::presentation::format;
use crate::ui::presentation::state::use_hub_state;

#[component]
pub fn HistoryList() -> Element {
    let hub = use_hub_state();
    let entries = hub.recent_history();

    rsx! {
        section {
            class: "card",
            h2 { "Quest Log" }
            if entries.is_empty() {
                div { class: "muted", {format::EMPTY_HISTORY_TEXT} }
            }
            for (index, entry) in entries.into_iter().enumerate() {
                div {
                    key: "{index}-{entry.timestamp}",
                    class: "item",
                    div { class: "muted", {format::local_timestamp(entry.timestamp)} }
                    div { "{entry.label}" }
                    div { class: "muted", {format::history_gain(entry.xp_delta, entry.mischief_delta)} }
                }
            }
        }
    }
}
