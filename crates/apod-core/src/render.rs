//! Render models for gallery items and the detail view.
//!
//! These are plain data: the UI layer turns them into elements through its
//! own text and attribute bindings, which escape every value. Nothing here
//! builds markup by string interpolation.

use crate::media::{self, MediaClass, VideoClassification};
use crate::overlay::DetailOverlay;
use crate::types::ApodRecord;

/// Icon plus message shown in place of gallery content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub icon: &'static str,
    pub message: &'static str,
}

pub const IDLE_PLACEHOLDER: Placeholder = Placeholder {
    icon: "🔭",
    message: "Select a date range and click \"Get Space Images\" to explore the cosmos!",
};

pub const LOADING_PLACEHOLDER: Placeholder = Placeholder {
    icon: "🚀",
    message: "Loading space images...",
};

pub const ERROR_PLACEHOLDER: Placeholder = Placeholder {
    icon: "❌",
    message: "Error loading images. Please try again.",
};

pub const EMPTY_RESULTS_PLACEHOLDER: Placeholder = Placeholder {
    icon: "🌌",
    message: "No images found for this date range.",
};

/// Outbound link block used for videos that cannot be previewed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: String,
    pub link_text: &'static str,
}

/// Media part of a gallery card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailMedia {
    Image {
        src: String,
        alt: String,
    },
    /// YouTube preview frame with a play affordance on top
    VideoPreview {
        src: String,
        alt: String,
        label: &'static str,
    },
    VideoPlaceholder(VideoLink),
}

/// A rendered gallery card.
///
/// Holds the record it was rendered from so activating the card can open
/// the detail overlay with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailView {
    pub media: ThumbnailMedia,
    pub title: String,
    pub date: String,
    pub record: ApodRecord,
}

impl ThumbnailView {
    /// Activation handler: show this card's record in the overlay.
    pub fn activate(&self, overlay: &mut DetailOverlay) {
        overlay.open(self.record.clone());
    }
}

/// Media region of the detail view. Exactly one region is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMedia {
    Image {
        src: String,
        alt: String,
    },
    /// Embedded player plus a link back to the original page
    Embed {
        src: String,
        title: String,
        external_href: String,
        link_text: &'static str,
    },
    Fallback {
        icon: &'static str,
        heading: &'static str,
        description: &'static str,
        href: String,
        button_text: &'static str,
    },
}

/// Contents of the detail overlay for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub date: String,
    pub explanation: String,
    /// Credit line, absent for public-domain entries
    pub copyright: Option<String>,
    pub media: DetailMedia,
}

impl DetailView {
    /// Source of the primary image, if the image region is shown
    pub fn image_src(&self) -> Option<&str> {
        match &self.media {
            DetailMedia::Image { src, .. } => Some(src),
            _ => None,
        }
    }

    pub fn shows_video_region(&self) -> bool {
        !matches!(self.media, DetailMedia::Image { .. })
    }
}

/// Build the gallery card for a record.
pub fn render_thumbnail(record: &ApodRecord) -> ThumbnailView {
    let media = match media::classify(record) {
        MediaClass::Image => ThumbnailMedia::Image {
            src: record.url.clone(),
            alt: record.title.clone(),
        },
        MediaClass::Video(VideoClassification::YouTube(id)) => ThumbnailMedia::VideoPreview {
            src: media::thumbnail_url(&id),
            alt: record.title.clone(),
            label: "YouTube Video",
        },
        MediaClass::Video(VideoClassification::YouTubeUnresolved) => {
            ThumbnailMedia::VideoPlaceholder(VideoLink {
                icon: "🎬",
                label: "YouTube Video",
                href: record.url.clone(),
                link_text: "Watch on YouTube",
            })
        }
        MediaClass::Video(VideoClassification::GenericVideo) => {
            ThumbnailMedia::VideoPlaceholder(VideoLink {
                icon: "🎥",
                label: "Video Content",
                href: record.url.clone(),
                link_text: "View Video",
            })
        }
    };

    ThumbnailView {
        media,
        title: record.title.clone(),
        date: record.date.clone(),
        record: record.clone(),
    }
}

/// Build the detail view for a record.
pub fn render_detail(record: &ApodRecord) -> DetailView {
    let media = match media::classify(record) {
        MediaClass::Image => DetailMedia::Image {
            src: record.display_image_url().to_string(),
            alt: record.title.clone(),
        },
        MediaClass::Video(VideoClassification::YouTube(id)) => DetailMedia::Embed {
            src: media::embed_url(&id),
            title: record.title.clone(),
            external_href: record.url.clone(),
            link_text: "🔗 Open in YouTube",
        },
        MediaClass::Video(VideoClassification::YouTubeUnresolved) => DetailMedia::Fallback {
            icon: "🎬",
            heading: "YouTube Video",
            description: "This content is available on YouTube",
            href: record.url.clone(),
            button_text: "Watch on YouTube",
        },
        MediaClass::Video(VideoClassification::GenericVideo) => DetailMedia::Fallback {
            icon: "🎥",
            heading: "Video Content",
            description: "Click the link below to view this video content",
            href: record.url.clone(),
            button_text: "View Video",
        },
    };

    DetailView {
        title: record.title.clone(),
        date: record.date.clone(),
        explanation: record.explanation_or_fallback().to_string(),
        copyright: record
            .copyright
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
        media,
    }
}
