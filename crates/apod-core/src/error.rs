//! Error types for APOD Gallery

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// A date bound was left empty; reported to the user, never fetched
    #[error("Please select both start and end dates")]
    MissingDateBound,

    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("API request failed: {0}")]
    Status(StatusCode),

    /// Body was not a collection of records
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GalleryError {
    /// True for every failure that ends a submission in the error placeholder.
    ///
    /// Validation and configuration problems are caught before a request is
    /// ever issued and are therefore not fetch errors.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            GalleryError::Http(_) | GalleryError::Status(_) | GalleryError::Decode(_)
        )
    }
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::Status(StatusCode::FORBIDDEN);
        assert_eq!(format!("{}", err), "API request failed: 403 Forbidden");
        assert_eq!(
            GalleryError::MissingDateBound.to_string(),
            "Please select both start and end dates"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: GalleryError = json_err.into();
        assert!(matches!(err, GalleryError::Decode(_)));
        assert!(err.is_fetch_error());
    }

    #[test]
    fn test_validation_is_not_fetch_error() {
        assert!(!GalleryError::MissingDateBound.is_fetch_error());
        assert!(!GalleryError::Config("bad".into()).is_fetch_error());
    }
}
