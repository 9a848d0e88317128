//! Gallery Card Component
//!
//! One APOD entry in the grid: image, YouTube preview or video link, with
//! a title/date caption. Clicking the card opens the detail overlay.

use apod_core::{ThumbnailMedia, ThumbnailView};
use dioxus::prelude::*;

use crate::context::use_ui;

/// Gallery card for one record
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GalleryCard { view: render_thumbnail(&record) }
/// }
/// ```
#[component]
pub fn GalleryCard(view: ThumbnailView) -> Element {
    let ui = use_ui();
    let mut overlay = ui.overlay;

    let card = view.clone();
    let open_detail = move |_| card.activate(&mut overlay.write());

    rsx! {
        div {
            class: "gallery-item",
            onclick: open_detail,

            {render_media(&view.media)}

            div { class: "gallery-info",
                h3 { class: "gallery-title", "{view.title}" }
                p { class: "gallery-date", "{view.date}" }
            }
        }
    }
}

fn render_media(media: &ThumbnailMedia) -> Element {
    match media {
        ThumbnailMedia::Image { src, alt } => rsx! {
            img { class: "gallery-image", src: "{src}", alt: "{alt}" }
        },
        ThumbnailMedia::VideoPreview { src, alt, label } => rsx! {
            div { class: "video-preview",
                img { class: "gallery-image video-thumbnail", src: "{src}", alt: "{alt}" }
                div { class: "video-overlay",
                    div { class: "play-button", {play_icon()} }
                    span { class: "video-label", "{label}" }
                }
            }
        },
        ThumbnailMedia::VideoPlaceholder(link) => rsx! {
            div { class: "video-placeholder",
                div { class: "video-icon", "{link.icon}" }
                p {
                    strong { "{link.label}" }
                }
                a {
                    class: "video-link",
                    href: "{link.href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    // Following the link should not also open the overlay
                    onclick: move |e| e.stop_propagation(),
                    "{link.link_text}"
                }
            }
        },
    }
}

fn play_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "60",
            height: "60",
            view_box: "0 0 24 24",
            fill: "none",
            circle { cx: "12", cy: "12", r: "11", fill: "rgba(255,255,255,0.9)" }
            polygon { points: "9,8 9,16 17,12", fill: "#FF0000" }
        }
    }
}
