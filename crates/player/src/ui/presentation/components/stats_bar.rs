//! XP, mischief and streak counters

use dioxus::prelude::*;

use crate::ui::presentation::state::use_hub_state;

#[component]
pub fn StatsBar() -> Element {
    let hub = use_hub_state();
    let profile = hub.profile();

    rsx! {
        section {
            class: "card stats",
            div {
                class: "stat",
                span { class: "muted", "XP" }
                strong { "{profile.xp}" }
            }
            div {
                class: "stat",
                span { class: "muted", "Mischief ✦" }
                strong { "{profile.mischief}" }
            }
            div {
                class: "stat",
                span { class: "muted", "Streak 🔥" }
                strong { "{profile.streak}" }
            }
        }
    }
}
