use apod_core::{ApodClient, DetailOverlay, GalleryController, SpaceFacts};
use dioxus::prelude::*;

use crate::components::{DateRangeForm, DetailModal, Gallery, SpaceFact};
use crate::context::{get_apod_config, UiHandles};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the shared UI handles and the APOD client.
#[component]
pub fn App() -> Element {
    let gallery = use_signal(|| GalleryController::new(SpaceFacts::builtin()));
    let overlay = use_signal(DetailOverlay::new);
    let fact_dimmed = use_signal(|| false);

    let client: Signal<Option<ApodClient>> = use_signal(|| {
        match ApodClient::new(get_apod_config()) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Failed to create APOD client: {}", e);
                None
            }
        }
    });

    let ui = use_context_provider(|| UiHandles {
        gallery,
        overlay,
        fact_dimmed,
    });
    use_context_provider(|| client);

    // Background stays still while the overlay is up
    let page_class = if ui.overlay.read().scroll_locked() {
        "page page--locked"
    } else {
        "page"
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "{page_class}",
            header { class: "site-header",
                h1 { class: "page-title", "NASA Space Explorer" }
                p { class: "tagline", "Astronomy Picture of the Day, one date range at a time" }
            }

            SpaceFact {}
            DateRangeForm {}
            Gallery {}
            DetailModal {}
        }
    }
}
