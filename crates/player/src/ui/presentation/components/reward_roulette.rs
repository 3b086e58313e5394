//! Reward wheel

use dioxus::prelude::*;

use crate::ui::presentation::state::use_hub_state;

#[component]
pub fn RewardRoulette() -> Element {
    let mut hub = use_hub_state();
    let wheel_text = hub.wheel_text.read().clone();
    let reward_result = hub.reward_result.read().clone();

    rsx! {
        section {
            class: "card",
            h2 { "Reward Roulette" }
            div { class: "wheel", "{wheel_text}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| hub.spin_reward(),
                "Spin"
            }
            if !reward_result.is_empty() {
                p { class: "muted", "{reward_result}" }
            }
        }
    }
}
