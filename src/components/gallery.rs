//! Gallery Component
//!
//! Grid of APOD cards, or a placeholder for the idle, loading, empty and
//! error states.

use apod_core::GalleryView;
use dioxus::prelude::*;

use super::{GalleryCard, GalleryPlaceholder};
use crate::context::use_ui;

#[component]
pub fn Gallery() -> Element {
    let ui = use_ui();
    let view = ui.gallery.read().view();

    let content = match view {
        GalleryView::Placeholder(placeholder) => rsx! {
            GalleryPlaceholder { placeholder: placeholder }
        },
        GalleryView::Items(items) => rsx! {
            for (index, item) in items.into_iter().enumerate() {
                GalleryCard {
                    key: "{index}",
                    view: item,
                }
            }
        },
    };

    rsx! {
        div { id: "gallery", class: "gallery",
            {content}
        }
    }
}
