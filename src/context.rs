//! Shared UI state for APOD Gallery.
//!
//! The gallery controller, the detail overlay and the APOD client are
//! created once in [`crate::app::App`] and handed to components through
//! context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let ui = use_ui();
//! ui.overlay.write().open(record);
//! ```

use std::time::Duration;

use apod_core::{ApodClient, ApodConfig, DetailOverlay, GalleryController};
use dioxus::prelude::*;

/// How long the fact text stays dimmed after it changes
const FACT_FADE: Duration = Duration::from_millis(150);

/// Reactive handles shared by every component.
#[derive(Clone, Copy)]
pub struct UiHandles {
    pub gallery: Signal<GalleryController>,
    pub overlay: Signal<DetailOverlay>,
    /// True while the fact text is fading in
    pub fact_dimmed: Signal<bool>,
}

impl UiHandles {
    /// Draw a new fact and play the fade-in
    pub fn refresh_fact(mut self) {
        self.gallery.write().refresh_fact();
        self.flash_fact();
    }

    /// Dim the fact text briefly after it was replaced
    pub fn flash_fact(mut self) {
        self.fact_dimmed.set(true);
        spawn(async move {
            tokio::time::sleep(FACT_FADE).await;
            self.fact_dimmed.set(false);
        });
    }
}

/// Get the client configuration chosen at start-up.
pub fn get_apod_config() -> ApodConfig {
    crate::get_apod_config()
}

/// Hook to access the shared UI handles.
pub fn use_ui() -> UiHandles {
    use_context::<UiHandles>()
}

/// Hook to access the APOD client.
///
/// `None` only if the configuration was rejected, which `main` already
/// guards against.
pub fn use_client() -> Signal<Option<ApodClient>> {
    use_context::<Signal<Option<ApodClient>>>()
}
