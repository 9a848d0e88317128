//! APOD Gallery Core Library
//!
//! Fetches Astronomy Picture of the Day records for a date range and turns
//! them into gallery cards and a detail view.
//!
//! ## Overview
//!
//! - [`media`]: classifies media URLs (image, YouTube, other video)
//! - [`render`]: builds the card and detail render models
//! - [`gallery`]: the fetch/render state machine
//! - [`overlay`]: the single detail overlay
//!
//! ## Quick Start
//!
//! ```ignore
//! use apod_core::{ApodClient, ApodConfig, GalleryController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApodClient::new(ApodConfig::from_env())?;
//!     let mut gallery = GalleryController::default();
//!
//!     gallery.submit(&client, "2022-01-01", "2022-01-03").await?;
//!     for card in gallery.thumbnails() {
//!         println!("{}  {}", card.date, card.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod facts;
pub mod gallery;
pub mod media;
pub mod overlay;
pub mod render;
pub mod types;

// Re-exports
pub use client::{decode_records, ApodClient, ApodSource};
pub use config::ApodConfig;
pub use error::{GalleryError, GalleryResult};
pub use facts::{FactSource, SpaceFacts};
pub use gallery::{Completion, GalleryController, GalleryState, GalleryView, PendingRequest, RequestToken};
pub use media::{MediaClass, VideoClassification};
pub use overlay::{DetailOverlay, DismissTrigger, OverlayState};
pub use render::{DetailMedia, DetailView, Placeholder, ThumbnailMedia, ThumbnailView, VideoLink};
pub use types::*;
