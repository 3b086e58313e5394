//! Dismissable notice for temptation results and refusals

use dioxus::prelude::*;

use crate::ui::presentation::state::use_hub_state;

#[component]
pub fn NoticeToast() -> Element {
    let mut hub = use_hub_state();
    let notice = hub.notice.read().clone();

    rsx! {
        if let Some(message) = notice {
            div {
                class: "toast",
                onclick: move |_| hub.dismiss_notice(),
                span { "{message}" }
                button { class: "btn", "×" }
            }
        }
    }
}
