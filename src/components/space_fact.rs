//! Space Fact Panel
//!
//! "Did you know?" box with a random fact and a button for another one.

use dioxus::prelude::*;

use crate::context::use_ui;

#[component]
pub fn SpaceFact() -> Element {
    let ui = use_ui();

    // Fade in the fact drawn at start-up
    use_hook(move || ui.flash_fact());

    let fact = ui.gallery.read().current_fact().to_string();
    let text_class = if *ui.fact_dimmed.read() {
        "space-fact-text space-fact-text--dimmed"
    } else {
        "space-fact-text"
    };

    rsx! {
        section { class: "space-fact",
            div { class: "space-fact-header",
                span { class: "space-fact-icon", "🌟" }
                h2 { "Did You Know?" }
            }
            p { id: "space-fact-text", class: "{text_class}", "{fact}" }
            button {
                id: "new-fact-btn",
                class: "btn-secondary",
                onclick: move |_| ui.refresh_fact(),
                "New Fact"
            }
        }
    }
}
