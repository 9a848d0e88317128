//! Gallery Placeholder
//!
//! Icon plus message shown instead of cards while idle, loading or failed.

use apod_core::Placeholder;
use dioxus::prelude::*;

/// Centered placeholder block for the gallery region
#[component]
pub fn GalleryPlaceholder(placeholder: Placeholder) -> Element {
    rsx! {
        div { class: "placeholder",
            div { class: "placeholder-icon", "{placeholder.icon}" }
            p { "{placeholder.message}" }
        }
    }
}
