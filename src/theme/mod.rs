//! Visual theme for APOD Gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
