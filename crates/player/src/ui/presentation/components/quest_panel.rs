//! Chaos Button and Temptation Test

use dioxus::prelude::*;

use crate::ui::presentation::state::use_hub_state;

#[component]
pub fn QuestPanel() -> Element {
    let mut hub = use_hub_state();
    let quest_text = hub.quest_text.read().clone();
    let quest_gain = hub.quest_gain.read().clone();

    rsx! {
        section {
            class: "card",
            h2 { "Chaos Button" }
            p { class: "quest", "{quest_text}" }
            if !quest_gain.is_empty() {
                p { class: "muted", "{quest_gain}" }
            }
            div {
                class: "row",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| hub.draw_quest(),
                    "Give me chaos"
                }
                button {
                    class: "btn",
                    onclick: move |_| hub.resolve_temptation(),
                    "Temptation Test"
                }
            }
        }
    }
}
