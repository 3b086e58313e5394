//! Strange Drip Dropper: design queue and caption generator

use dioxus::prelude::*;

use crate::ui::presentation::format;
use crate::ui::presentation::state::use_hub_state;

#[component]
pub fn DripDropper() -> Element {
    let mut hub = use_hub_state();
    let mut draft = use_signal(String::new);
    let drops = hub.drops();
    let caption = hub.caption.read().clone();

    let mut submit = move || {
        let title = draft.read().clone();
        if hub.add_design(&title) {
            draft.set(String::new());
        }
    };

    rsx! {
        section {
            class: "card",
            h2 { "Strange Drip Dropper" }
            div {
                class: "row",
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Design title",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                    onkeypress: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| submit(),
                    "Queue design"
                }
            }

            if drops.is_empty() {
                div { class: "muted", {format::EMPTY_DROPS_TEXT} }
            }
            for drop in drops {
                div {
                    key: "{drop.id}",
                    class: "item",
                    div { strong { "{drop.title}" } }
                    div { class: "muted", {format::local_timestamp(drop.created_at)} }
                    div {
                        class: "row",
                        button {
                            class: "btn",
                            onclick: move |_| hub.remove_design(drop.id),
                            "Remove"
                        }
                    }
                }
            }

            div {
                class: "row",
                button {
                    class: "btn",
                    onclick: move |_| hub.random_caption(),
                    "Random caption"
                }
            }
            textarea {
                class: "input caption",
                readonly: true,
                value: "{caption}",
            }
        }
    }
}
