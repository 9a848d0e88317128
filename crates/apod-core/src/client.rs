//! APOD data provider client.

use std::future::Future;

use reqwest::{StatusCode, Url};

use crate::config::ApodConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::types::{ApodRecord, DateRange};

/// Anything that can fetch the records for a date range.
///
/// Implemented by [`ApodClient`] for the real API; tests script their own.
pub trait ApodSource {
    fn fetch_range(
        &self,
        range: &DateRange,
    ) -> impl Future<Output = GalleryResult<Vec<ApodRecord>>> + Send;
}

/// HTTP client for the APOD endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApodClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for ApodClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApodClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApodClient {
    /// Build a client from a validated configuration
    pub fn new(config: ApodConfig) -> GalleryResult<Self> {
        let base_url = config.validate()?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("apod-gallery/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GalleryError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Full request URL for an inclusive date range
    pub fn request_url(&self, range: &DateRange) -> Url {
        self.url_with_key(range, &self.api_key)
    }

    /// Request URL with the API key masked, for logging
    pub fn redacted_url(&self, range: &DateRange) -> Url {
        self.url_with_key(range, "REDACTED")
    }

    fn url_with_key(&self, range: &DateRange, api_key: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("start_date", range.start())
            .append_pair("end_date", range.end())
            .append_pair("api_key", api_key);
        url
    }
}

impl ApodSource for ApodClient {
    async fn fetch_range(&self, range: &DateRange) -> GalleryResult<Vec<ApodRecord>> {
        tracing::info!(url = %self.redacted_url(range), "Fetching APOD records");

        let response = self.http.get(self.request_url(range)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let records = decode_records(status, &body)?;
        tracing::info!(count = records.len(), %range, "Received APOD records");
        Ok(records)
    }
}

/// Turn a provider response into records.
///
/// Non-success statuses fail before the body is looked at.
pub fn decode_records(status: StatusCode, body: &str) -> GalleryResult<Vec<ApodRecord>> {
    if !status.is_success() {
        return Err(GalleryError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}
