//! UI Components for APOD Gallery.

mod date_range_form;
mod detail_modal;
mod gallery;
mod gallery_card;
mod placeholder;
mod space_fact;

pub use date_range_form::DateRangeForm;
pub use detail_modal::DetailModal;
pub use gallery::Gallery;
pub use gallery_card::GalleryCard;
pub use placeholder::GalleryPlaceholder;
pub use space_fact::SpaceFact;
