//! Detail overlay lifecycle.
//!
//! One overlay exists per application. Opening it while it is already open
//! replaces the displayed record; every dismissal path ends in [`close`].
//!
//! [`close`]: DetailOverlay::close

use crate::render::{render_detail, DetailView};
use crate::types::ApodRecord;

/// Whether the overlay is visible and for which record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(ApodRecord),
}

/// Ways the user can dismiss the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    /// Click on the backdrop outside the content box
    Backdrop,
    /// Escape key
    CancelKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailOverlay {
    state: OverlayState,
    view: Option<DetailView>,
    image_src: Option<String>,
    scroll_locked: bool,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the overlay from `record` and show it.
    ///
    /// Background scrolling stays suppressed until [`DetailOverlay::close`].
    pub fn open(&mut self, record: ApodRecord) {
        let view = render_detail(&record);
        tracing::debug!(title = %record.title, date = %record.date, "Opening detail overlay");

        self.image_src = view.image_src().map(str::to_string);
        self.view = Some(view);
        self.state = OverlayState::Open(record);
        self.scroll_locked = true;
    }

    /// Hide the overlay, restore scrolling and clear the image source.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("Closing detail overlay");
        }
        self.state = OverlayState::Closed;
        self.view = None;
        self.image_src = None;
        self.scroll_locked = false;
    }

    /// Route a dismissal to [`DetailOverlay::close`].
    ///
    /// The cancel key is ignored while the overlay is closed. Returns whether
    /// the overlay was open and is now closed.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        if !self.is_open() {
            return false;
        }
        tracing::debug!(?trigger, "Detail overlay dismissed");
        self.close();
        true
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Record currently on display
    pub fn record(&self) -> Option<&ApodRecord> {
        match &self.state {
            OverlayState::Open(record) => Some(record),
            OverlayState::Closed => None,
        }
    }

    pub fn view(&self) -> Option<&DetailView> {
        self.view.as_ref()
    }

    /// Primary image source; `None` when hidden or showing a video
    pub fn image_src(&self) -> Option<&str> {
        self.image_src.as_deref()
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn galaxy() -> ApodRecord {
        ApodRecord::image("Galaxy", "2022-01-01", "small.jpg").with_hd_url("big.jpg")
    }

    #[test]
    fn test_open_then_close() {
        let mut overlay = DetailOverlay::new();
        overlay.open(galaxy());
        assert!(overlay.is_open());
        assert!(overlay.scroll_locked());
        assert_eq!(overlay.image_src(), Some("big.jpg"));

        overlay.close();
        assert!(!overlay.is_open());
        assert!(!overlay.scroll_locked());
        assert_eq!(overlay.image_src(), None);
        assert_eq!(overlay.state(), &OverlayState::Closed);
    }

    #[test]
    fn test_open_replaces_record() {
        let mut overlay = DetailOverlay::new();
        overlay.open(galaxy());
        overlay.open(ApodRecord::video("Clip", "2022-01-02", "https://vimeo.com/1"));

        assert_eq!(overlay.record().map(|r| r.title.as_str()), Some("Clip"));
        assert_eq!(overlay.image_src(), None);
        assert!(overlay.view().is_some_and(|v| v.shows_video_region()));
    }

    #[test]
    fn test_every_trigger_closes() {
        for trigger in [
            DismissTrigger::CloseButton,
            DismissTrigger::Backdrop,
            DismissTrigger::CancelKey,
        ] {
            let mut overlay = DetailOverlay::new();
            overlay.open(galaxy());
            assert!(overlay.dismiss(trigger));
            assert!(!overlay.is_open());
            assert_eq!(overlay.image_src(), None);
        }
    }

    #[test]
    fn test_dismiss_when_closed_is_noop() {
        let mut overlay = DetailOverlay::new();
        assert!(!overlay.dismiss(DismissTrigger::CancelKey));
        assert_eq!(overlay, DetailOverlay::new());
    }
}
