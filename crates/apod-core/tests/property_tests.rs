//! Property-based tests for media classification
//!
//! Uses proptest to check the classifier invariants over arbitrary URLs.

use apod_core::media::{classify_video_url, extract_video_id, is_video_host};
use apod_core::VideoClassification;
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Valid 11 character YouTube ids
fn video_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_-]{11}").expect("valid regex")
}

/// Known YouTube URL shapes wrapping an id
fn youtube_url_strategy() -> impl Strategy<Value = (String, String)> {
    (video_id_strategy(), 0..5usize).prop_map(|(id, shape)| {
        let url = match shape {
            0 => format!("https://www.youtube.com/watch?v={}", id),
            1 => format!("https://www.youtube.com/embed/{}?rel=0", id),
            2 => format!("https://youtu.be/{}", id),
            3 => format!("https://youtube.com/v/{}", id),
            _ => format!("https://www.youtube.com/watch?list=PL1&v={}&t=30", id),
        };
        (url, id)
    })
}

/// URLs that cannot mention a YouTube host
fn plain_url_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("https://[a-x]{1,12}\\.(org|net|gov)/[a-z0-9/]{0,20}")
        .expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every known shape yields exactly the embedded 11 character id
    #[test]
    fn known_shapes_extract_id((url, id) in youtube_url_strategy()) {
        let extracted = extract_video_id(&url);
        prop_assert_eq!(extracted, Some(id.as_str()));
        prop_assert_eq!(extracted.map(str::len), Some(11));
    }

    /// Host detection is a substring test, independent of position
    #[test]
    fn host_detected_anywhere(
        prefix in "[a-z:/.]{0,20}",
        host in prop_oneof![Just("youtube.com"), Just("youtu.be")],
        suffix in "[a-z0-9/?=]{0,20}",
    ) {
        let url = format!("{}{}{}", prefix, host, suffix);
        prop_assert!(is_video_host(&url));
    }

    /// Non-YouTube URLs are generic videos with no id
    #[test]
    fn plain_urls_are_generic(url in plain_url_strategy()) {
        prop_assert!(!is_video_host(&url));
        prop_assert_eq!(extract_video_id(&url), None);
        prop_assert_eq!(classify_video_url(&url), VideoClassification::GenericVideo);
    }

    /// Classification is a pure function of the URL
    #[test]
    fn classification_is_deterministic(url in ".{0,80}") {
        let first = classify_video_url(&url);
        for _ in 0..3 {
            prop_assert_eq!(classify_video_url(&url), first.clone());
        }
    }
}
