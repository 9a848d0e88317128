//! Core types for APOD Gallery

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, GalleryResult};

/// Shown in the detail view when a record carries no explanation.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Kind of media a record points at.
///
/// The provider documents only `image` and `video`. Anything else is kept
/// verbatim so one odd entry cannot fail a whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[serde(untagged)]
    Other(String),
}

impl Default for MediaType {
    fn default() -> Self {
        MediaType::Other(String::new())
    }
}

/// One Astronomy Picture of the Day entry, as returned by the provider.
///
/// Records are never mutated after they are received. Missing fields
/// degrade to empty strings instead of rejecting the response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApodRecord {
    #[serde(default)]
    pub title: String,
    /// ISO calendar date (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub url: String,
    /// High-resolution variant, only meaningful for images
    #[serde(default, rename = "hdurl", skip_serializing_if = "Option::is_none")]
    pub hd_url: Option<String>,
    /// Credit line; public-domain entries have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl ApodRecord {
    /// Create an image record
    pub fn image(title: impl Into<String>, date: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            media_type: MediaType::Image,
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create a video record
    pub fn video(title: impl Into<String>, date: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            media_type: MediaType::Video,
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_hd_url(mut self, hd_url: impl Into<String>) -> Self {
        self.hd_url = Some(hd_url.into());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    /// Explanation text, or the fixed fallback when absent or empty
    pub fn explanation_or_fallback(&self) -> &str {
        match self.explanation.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_DESCRIPTION,
        }
    }

    /// Source for the full-size image: `hdurl` when present, else `url`
    pub fn display_image_url(&self) -> &str {
        match self.hd_url.as_deref() {
            Some(hd) if !hd.is_empty() => hd,
            _ => &self.url,
        }
    }
}

/// Inclusive date range requested from the provider.
///
/// Both bounds are supplied by the date pickers, which already restrict
/// them to the archive window. The only check made here is presence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: String,
    end: String,
}

impl DateRange {
    /// Build a range from raw input values
    ///
    /// # Errors
    ///
    /// [`GalleryError::MissingDateBound`] if either bound is blank.
    pub fn new(start: &str, end: &str) -> GalleryResult<Self> {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(GalleryError::MissingDateBound);
        }
        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_provider_record() {
        let json = r#"{
            "copyright": "Someone",
            "date": "2022-01-01",
            "explanation": "A galaxy.",
            "hdurl": "https://apod.nasa.gov/apod/image/2201/big.jpg",
            "media_type": "image",
            "service_version": "v1",
            "title": "Galaxy",
            "url": "https://apod.nasa.gov/apod/image/2201/small.jpg"
        }"#;
        let record: ApodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.media_type, MediaType::Image);
        assert_eq!(
            record.hd_url.as_deref(),
            Some("https://apod.nasa.gov/apod/image/2201/big.jpg")
        );
        assert_eq!(record.copyright.as_deref(), Some("Someone"));
    }

    #[test]
    fn test_unknown_media_type_is_kept() {
        let json = r#"{"title": "x", "date": "2022-01-01", "media_type": "other", "url": ""}"#;
        let record: ApodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.media_type, MediaType::Other("other".to_string()));
    }

    #[test]
    fn test_missing_fields_degrade() {
        let record: ApodRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.title, "");
        assert_eq!(record.url, "");
        assert_eq!(record.media_type, MediaType::default());
    }

    #[test]
    fn test_explanation_fallback() {
        let record = ApodRecord::image("t", "2022-01-01", "u");
        assert_eq!(record.explanation_or_fallback(), NO_DESCRIPTION);

        let record = record.with_explanation("");
        assert_eq!(record.explanation_or_fallback(), NO_DESCRIPTION);

        let record = record.with_explanation("Stars.");
        assert_eq!(record.explanation_or_fallback(), "Stars.");
    }

    #[test]
    fn test_display_image_url_prefers_hd() {
        let record = ApodRecord::image("t", "d", "small.jpg");
        assert_eq!(record.display_image_url(), "small.jpg");

        let record = record.with_hd_url("big.jpg");
        assert_eq!(record.display_image_url(), "big.jpg");

        let record = record.with_hd_url("");
        assert_eq!(record.display_image_url(), "small.jpg");
    }

    #[test]
    fn test_date_range_requires_both_bounds() {
        assert!(matches!(
            DateRange::new("", "2022-01-03"),
            Err(GalleryError::MissingDateBound)
        ));
        assert!(matches!(
            DateRange::new("2022-01-01", "   "),
            Err(GalleryError::MissingDateBound)
        ));

        let range = DateRange::new(" 2022-01-01", "2022-01-03 ").unwrap();
        assert_eq!(range.start(), "2022-01-01");
        assert_eq!(range.end(), "2022-01-03");
        assert_eq!(range.to_string(), "2022-01-01..=2022-01-03");
    }
}
