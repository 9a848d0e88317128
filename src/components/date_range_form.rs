//! Date Range Form
//!
//! Start/end date pickers and the button that loads the gallery.

use apod_core::{ApodSource, Completion, FactSource, GalleryController, GalleryError, PendingRequest};
use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::context::{use_client, use_ui};

#[component]
pub fn DateRangeForm() -> Element {
    let ui = use_ui();
    let client = use_client();
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);

    let handle_submit = move |_| {
        let mut gallery = ui.gallery;

        let step = prepare_submit(&mut *gallery.write(), client(), &start_date(), &end_date());
        let (api, pending) = match step {
            SubmitStep::Fetch(api, pending) => (api, pending),
            SubmitStep::Notice(message) => {
                show_notice(message);
                return;
            }
            SubmitStep::Unavailable => return,
        };

        spawn(async move {
            let outcome = api.fetch_range(&pending.range).await;
            if gallery.write().complete(pending.token, outcome) == Completion::Loaded {
                ui.flash_fact();
            }
        });
    };

    rsx! {
        div { class: "filters",
            label { class: "date-field",
                span { "Start date" }
                input {
                    id: "startDate",
                    r#type: "date",
                    value: "{start_date}",
                    oninput: move |evt| start_date.set(evt.value()),
                }
            }
            label { class: "date-field",
                span { "End date" }
                input {
                    id: "endDate",
                    r#type: "date",
                    value: "{end_date}",
                    oninput: move |evt| end_date.set(evt.value()),
                }
            }
            button {
                class: "btn-primary",
                onclick: handle_submit,
                "Get Space Images"
            }
        }
    }
}

/// What a click on "Get Space Images" leads to
#[derive(Debug)]
enum SubmitStep<C> {
    /// Input rejected; the gallery is untouched
    Notice(String),
    /// Gallery is loading; run the request with this client
    Fetch(C, PendingRequest),
    /// No client to fetch with; the gallery already shows the error
    Unavailable,
}

/// Validate the form and move the gallery into its next state.
fn prepare_submit<C, F: FactSource>(
    gallery: &mut GalleryController<F>,
    client: Option<C>,
    start: &str,
    end: &str,
) -> SubmitStep<C> {
    let pending = match gallery.begin(start, end) {
        Ok(pending) => pending,
        Err(e) => return SubmitStep::Notice(e.to_string()),
    };

    match client {
        Some(client) => SubmitStep::Fetch(client, pending),
        None => {
            tracing::error!("No APOD client available");
            let err = GalleryError::Config("no APOD client configured".to_string());
            gallery.complete(pending.token, Err(err));
            SubmitStep::Unavailable
        }
    }
}

/// Modal warning dialog; runs off the UI thread like other rfd dialogs
fn show_notice(message: String) {
    spawn(async move {
        let _ = tokio::task::spawn_blocking(move || {
            MessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title("NASA Space Explorer")
                .set_description(message)
                .set_buttons(MessageButtons::Ok)
                .show()
        })
        .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use apod_core::{GalleryState, GalleryView, Placeholder};

    fn placeholder(gallery: &GalleryController) -> Placeholder {
        match gallery.view() {
            GalleryView::Placeholder(p) => p,
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_bound_shows_notice() {
        let mut gallery = GalleryController::default();
        let step = prepare_submit(&mut gallery, Some(()), "", "2022-01-03");

        match step {
            SubmitStep::Notice(message) => {
                assert_eq!(message, "Please select both start and end dates");
            }
            other => panic!("expected notice, got {:?}", other),
        }
        assert_eq!(gallery.state(), &GalleryState::Idle);
    }

    #[test]
    fn test_valid_range_starts_fetch() {
        let mut gallery = GalleryController::default();
        let step = prepare_submit(&mut gallery, Some("client"), "2022-01-01", "2022-01-03");

        match step {
            SubmitStep::Fetch(client, pending) => {
                assert_eq!(client, "client");
                assert_eq!(pending.range.start(), "2022-01-01");
                assert_eq!(pending.range.end(), "2022-01-03");
            }
            other => panic!("expected fetch, got {:?}", other),
        }
        assert!(gallery.is_loading());
    }

    #[test]
    fn test_missing_client_ends_in_error() {
        let mut gallery = GalleryController::default();
        let step = prepare_submit::<(), _>(&mut gallery, None, "2022-01-01", "2022-01-03");

        assert!(matches!(step, SubmitStep::Unavailable));
        assert!(!gallery.is_loading());
        assert_eq!(gallery.state(), &GalleryState::Error);
        assert_eq!(placeholder(&gallery).message, "Error loading images. Please try again.");
    }

    #[test]
    fn test_missing_client_does_not_mask_missing_bound() {
        let mut gallery = GalleryController::default();
        let step = prepare_submit::<(), _>(&mut gallery, None, "2022-01-01", "");

        assert!(matches!(step, SubmitStep::Notice(_)));
        assert_eq!(gallery.state(), &GalleryState::Idle);
    }
}
