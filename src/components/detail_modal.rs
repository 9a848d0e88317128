//! Detail Modal Component
//!
//! Full view of one record: large image or embedded player, title, date and
//! explanation. Close button, backdrop click and Escape all dismiss it.

use apod_core::{DetailMedia, DismissTrigger};
use dioxus::prelude::*;

use crate::context::use_ui;

/// Forwards every Escape press on the page, wherever focus is
const CANCEL_KEY_LISTENER: &str = r#"
document.addEventListener("keydown", (e) => {
    if (e.key === "Escape") {
        dioxus.send(e.key);
    }
});
await new Promise(() => {});
"#;

const EMBED_PERMISSIONS: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Detail overlay, rendered only while open
#[component]
pub fn DetailModal() -> Element {
    let ui = use_ui();
    let mut overlay = ui.overlay;

    // Installed once, before the early return, so it outlives open/close
    use_future(move || async move {
        let mut keys = document::eval(CANCEL_KEY_LISTENER);
        while let Ok(key) = keys.recv::<String>().await {
            if is_cancel_key(&key) {
                overlay.write().dismiss(DismissTrigger::CancelKey);
            }
        }
        tracing::debug!("Cancel key listener stopped");
    });

    let Some(view) = overlay.read().view().cloned() else {
        return rsx! {};
    };
    let image_src = overlay.read().image_src().map(str::to_string);

    rsx! {
        div {
            class: "modal",
            onclick: move |_| {
                overlay.write().dismiss(DismissTrigger::Backdrop);
            },

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    "aria-label": "Close",
                    onclick: move |_| {
                        overlay.write().dismiss(DismissTrigger::CloseButton);
                    },
                    "\u{00D7}"
                }

                {render_media(&view.media, image_src)}

                div { class: "modal-info",
                    h2 { class: "modal-title", "{view.title}" }
                    p { class: "modal-date", "{view.date}" }
                    if let Some(copyright) = &view.copyright {
                        p { class: "modal-copyright", "\u{00A9} {copyright}" }
                    }
                    p { class: "modal-explanation", "{view.explanation}" }
                }
            }
        }
    }
}

/// Key name as reported by the page's keyboard events
fn is_cancel_key(key: &str) -> bool {
    key == Key::Escape.to_string()
}

/// Image region or video region; never both
fn render_media(media: &DetailMedia, image_src: Option<String>) -> Element {
    match media {
        DetailMedia::Image { alt, .. } => rsx! {
            if let Some(src) = image_src {
                img { class: "modal-image", src: "{src}", alt: "{alt}" }
            }
        },
        DetailMedia::Embed {
            src,
            title,
            external_href,
            link_text,
        } => rsx! {
            div { class: "modal-video",
                div { class: "youtube-embed",
                    iframe {
                        width: "100%",
                        height: "400",
                        src: "{src}",
                        title: "{title}",
                        "frameborder": "0",
                        "allow": EMBED_PERMISSIONS,
                        "allowfullscreen": "true",
                    }
                    div { class: "video-links",
                        a {
                            class: "external-link",
                            href: "{external_href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link_text}"
                        }
                    }
                }
            }
        },
        DetailMedia::Fallback {
            icon,
            heading,
            description,
            href,
            button_text,
        } => rsx! {
            div { class: "modal-video",
                div { class: "video-fallback",
                    div { class: "video-icon-large", "{icon}" }
                    h3 { "{heading}" }
                    p { "{description}" }
                    a {
                        class: "video-button",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{button_text}"
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apod_core::{ApodRecord, DetailOverlay};

    #[test]
    fn test_escape_is_cancel_key() {
        assert!(is_cancel_key("Escape"));
        assert!(!is_cancel_key("Enter"));
        assert!(!is_cancel_key("Esc"));
        assert!(!is_cancel_key(""));
    }

    #[test]
    fn test_cancel_key_closes_open_overlay() {
        let mut overlay = DetailOverlay::default();
        overlay.open(ApodRecord::video("Launch", "2022-01-02", "https://youtu.be/dQw4w9WgXcQ"));
        assert!(overlay.scroll_locked());

        assert!(overlay.dismiss(DismissTrigger::CancelKey));
        assert!(!overlay.is_open());
        assert!(!overlay.scroll_locked());
        assert!(overlay.view().is_none());
    }

    #[test]
    fn test_cancel_key_while_closed_is_noop() {
        let mut overlay = DetailOverlay::default();
        assert!(!overlay.dismiss(DismissTrigger::CancelKey));
        assert!(!overlay.is_open());
    }
}
