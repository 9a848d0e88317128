//! Gallery controller.
//!
//! State machine `Idle -> Loading -> {Loaded | Error}`; any state can go
//! back to `Loading` on a new submission.
//!
//! A submission is split in two halves so the UI never holds the controller
//! across the network await:
//!
//! ```ignore
//! let pending = controller.begin("2022-01-01", "2022-01-03")?;
//! let outcome = client.fetch_range(&pending.range).await;
//! controller.complete(pending.token, outcome);
//! ```
//!
//! Every submission gets a fresh [`RequestToken`]. Only the response for the
//! most recent token is applied; older responses arriving late are dropped.

use crate::client::ApodSource;
use crate::error::{GalleryError, GalleryResult};
use crate::facts::{FactSource, SpaceFacts};
use crate::render::{
    render_thumbnail, Placeholder, ThumbnailView, EMPTY_RESULTS_PLACEHOLDER, ERROR_PLACEHOLDER,
    IDLE_PLACEHOLDER, LOADING_PLACEHOLDER,
};
use crate::types::{ApodRecord, DateRange};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GalleryState {
    #[default]
    Idle,
    Loading,
    /// Records in provider order
    Loaded(Vec<ApodRecord>),
    Error,
}

/// Identifies one submission. Tokens increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// A submission that passed validation and awaits its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub token: RequestToken,
    pub range: DateRange,
}

/// What happened to a response handed to [`GalleryController::complete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Loaded,
    Failed,
    /// A newer submission exists; the response was discarded
    Stale,
}

/// What the gallery region should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    Placeholder(Placeholder),
    Items(Vec<ThumbnailView>),
}

#[derive(Debug)]
pub struct GalleryController<F = SpaceFacts> {
    state: GalleryState,
    next_token: u64,
    latest: Option<RequestToken>,
    facts: F,
    current_fact: String,
}

impl Default for GalleryController<SpaceFacts> {
    fn default() -> Self {
        Self::new(SpaceFacts::builtin())
    }
}

impl<F: FactSource> GalleryController<F> {
    /// Create an idle controller and draw the initial fact
    pub fn new(facts: F) -> Self {
        let current_fact = facts.random_fact();
        Self {
            state: GalleryState::Idle,
            next_token: 0,
            latest: None,
            facts,
            current_fact,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Records of the last successful fetch, empty otherwise
    pub fn records(&self) -> &[ApodRecord] {
        match &self.state {
            GalleryState::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == GalleryState::Loading
    }

    pub fn current_fact(&self) -> &str {
        &self.current_fact
    }

    /// Draw a new informational fact
    pub fn refresh_fact(&mut self) -> &str {
        self.current_fact = self.facts.random_fact();
        &self.current_fact
    }

    /// Validate the range and enter `Loading`.
    ///
    /// On a missing bound nothing changes and no token is issued.
    pub fn begin(&mut self, start: &str, end: &str) -> GalleryResult<PendingRequest> {
        let range = DateRange::new(start, end).inspect_err(|_| {
            tracing::debug!("Submission rejected: missing date bound");
        })?;

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.latest = Some(token);
        self.state = GalleryState::Loading;

        tracing::info!(%range, token = token.0, "Loading gallery");
        Ok(PendingRequest { token, range })
    }

    /// Apply the outcome of the request identified by `token`.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: GalleryResult<Vec<ApodRecord>>,
    ) -> Completion {
        if self.latest != Some(token) {
            tracing::debug!(
                token = token.0,
                latest = ?self.latest.map(|t| t.0),
                "Discarding stale gallery response"
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(records) => {
                tracing::info!(count = records.len(), "Gallery loaded");
                self.state = GalleryState::Loaded(records);
                self.refresh_fact();
                Completion::Loaded
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching images");
                self.state = GalleryState::Error;
                Completion::Failed
            }
        }
    }

    /// Run a whole submission against `source`.
    ///
    /// # Errors
    ///
    /// Only [`GalleryError::MissingDateBound`]; fetch failures end in the
    /// `Error` state and are reported as [`Completion::Failed`].
    pub async fn submit<S: ApodSource>(
        &mut self,
        source: &S,
        start: &str,
        end: &str,
    ) -> Result<Completion, GalleryError> {
        let pending = self.begin(start, end)?;
        let outcome = source.fetch_range(&pending.range).await;
        Ok(self.complete(pending.token, outcome))
    }

    /// One rendered card per record, in provider order
    pub fn thumbnails(&self) -> Vec<ThumbnailView> {
        self.records().iter().map(render_thumbnail).collect()
    }

    /// Content for the gallery region
    pub fn view(&self) -> GalleryView {
        match &self.state {
            GalleryState::Idle => GalleryView::Placeholder(IDLE_PLACEHOLDER),
            GalleryState::Loading => GalleryView::Placeholder(LOADING_PLACEHOLDER),
            GalleryState::Error => GalleryView::Placeholder(ERROR_PLACEHOLDER),
            GalleryState::Loaded(records) if records.is_empty() => {
                GalleryView::Placeholder(EMPTY_RESULTS_PLACEHOLDER)
            }
            GalleryState::Loaded(_) => GalleryView::Items(self.thumbnails()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    struct FixedFact;

    impl FactSource for FixedFact {
        fn random_fact(&self) -> String {
            "fact".to_string()
        }
    }

    fn controller() -> GalleryController<FixedFact> {
        GalleryController::new(FixedFact)
    }

    #[test]
    fn test_starts_idle() {
        let c = controller();
        assert_eq!(c.state(), &GalleryState::Idle);
        assert_eq!(c.view(), GalleryView::Placeholder(IDLE_PLACEHOLDER));
        assert_eq!(c.current_fact(), "fact");
    }

    #[test]
    fn test_missing_bound_keeps_state() {
        let mut c = controller();
        assert!(matches!(
            c.begin("", "2022-01-03"),
            Err(GalleryError::MissingDateBound)
        ));
        assert_eq!(c.state(), &GalleryState::Idle);

        let pending = c.begin("2022-01-01", "2022-01-03").unwrap();
        c.complete(pending.token, Ok(vec![ApodRecord::image("t", "d", "u")]));
        assert!(c.begin("2022-01-01", "").is_err());
        assert_eq!(c.records().len(), 1);
    }

    #[test]
    fn test_loading_then_loaded() {
        let mut c = controller();
        let pending = c.begin("2022-01-01", "2022-01-01").unwrap();
        assert!(c.is_loading());
        assert_eq!(c.view(), GalleryView::Placeholder(LOADING_PLACEHOLDER));

        let done = c.complete(pending.token, Ok(vec![ApodRecord::image("t", "d", "u")]));
        assert_eq!(done, Completion::Loaded);
        match c.view() {
            GalleryView::Items(items) => assert_eq!(items.len(), 1),
            other => panic!("expected items, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_shows_error_placeholder() {
        let mut c = controller();
        let pending = c.begin("2022-01-01", "2022-01-01").unwrap();
        let done = c.complete(pending.token, Err(GalleryError::Status(StatusCode::FORBIDDEN)));
        assert_eq!(done, Completion::Failed);
        assert_eq!(c.state(), &GalleryState::Error);
        assert_eq!(c.view(), GalleryView::Placeholder(ERROR_PLACEHOLDER));
        assert!(c.thumbnails().is_empty());
    }

    #[test]
    fn test_empty_result_set() {
        let mut c = controller();
        let pending = c.begin("2022-01-01", "2022-01-01").unwrap();
        c.complete(pending.token, Ok(Vec::new()));
        assert_eq!(c.view(), GalleryView::Placeholder(EMPTY_RESULTS_PLACEHOLDER));
    }

    #[test]
    fn test_tokens_increase() {
        let mut c = controller();
        let a = c.begin("2022-01-01", "2022-01-01").unwrap();
        let b = c.begin("2022-01-02", "2022-01-02").unwrap();
        assert!(b.token > a.token);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut c = controller();
        let first = c.begin("2022-01-01", "2022-01-01").unwrap();
        let second = c.begin("2022-01-02", "2022-01-02").unwrap();

        assert_eq!(
            c.complete(second.token, Ok(vec![ApodRecord::image("new", "2022-01-02", "u")])),
            Completion::Loaded
        );
        assert_eq!(
            c.complete(first.token, Err(GalleryError::Status(StatusCode::BAD_GATEWAY))),
            Completion::Stale
        );
        assert_eq!(c.records()[0].title, "new");
    }
}
