//! Product card state.
//!
//! One [`VariantSelection`] exists per rendered product card; it tracks
//! which variant is active and derives everything the card displays.
//! Image derivation lives in [`images`] as pure functions.

pub mod images;
mod selection;

pub use images::{main_image, thumbnail_strip, ThumbnailImage};
pub use selection::{Thumbnail, VariantCard, VariantSelection};
