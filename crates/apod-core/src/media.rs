//! Media classification
//!
//! Decides how a record's media URL should be presented: as a plain image,
//! as a YouTube video with a resolvable id, or as an opaque video link.
//! Everything here is a pure function of the URL.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ApodRecord, MediaType};

/// Matches the common YouTube URL shapes and captures the 11 character id:
/// `watch?v=`, `embed/`, `v/`, `e/`, `youtu.be/` and `<section>/.../<id>`.
static YOUTUBE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:youtube\.com/",
        r"(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)",
        r"|youtu\.be/)",
        r"([A-Za-z0-9_-]{11})",
    ))
    .expect("YouTube id regex should compile")
});

/// How a video URL can be presented
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VideoClassification {
    /// YouTube link with an extracted 11 character id
    YouTube(String),
    /// YouTube link without a recognizable id
    YouTubeUnresolved,
    /// Any other video host
    GenericVideo,
}

/// Presentation class of a whole record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaClass {
    Image,
    Video(VideoClassification),
}

/// True if the URL mentions a YouTube host anywhere.
///
/// Plain substring test: `notyoutube.com.example` also passes.
pub fn is_video_host(url: &str) -> bool {
    !url.is_empty() && (url.contains("youtube.com") || url.contains("youtu.be"))
}

/// Extract the 11 character YouTube video id, if the URL has a known shape.
pub fn extract_video_id(url: &str) -> Option<&str> {
    YOUTUBE_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Preview image for a YouTube video. Not checked for existence.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}

/// Embeddable player URL: no autoplay, no related videos, minimal branding.
pub fn embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=0&rel=0&modestbranding=1",
        video_id
    )
}

/// Classify a URL that is known to point at a video.
pub fn classify_video_url(url: &str) -> VideoClassification {
    if !is_video_host(url) {
        return VideoClassification::GenericVideo;
    }
    match extract_video_id(url) {
        Some(id) => VideoClassification::YouTube(id.to_string()),
        None => VideoClassification::YouTubeUnresolved,
    }
}

/// Classify a record by media type and URL.
///
/// Unknown media types are treated as video links, so they end up with an
/// outbound link rather than a broken image.
pub fn classify(record: &ApodRecord) -> MediaClass {
    match record.media_type {
        MediaType::Image => MediaClass::Image,
        MediaType::Video | MediaType::Other(_) => {
            MediaClass::Video(classify_video_url(&record.url))
        }
    }
}
