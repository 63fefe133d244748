//! Catalog domain types and product-card state for the Artos store API.
//!
//! This crate models the read-only catalog snapshot a storefront works
//! with between page fetches:
//!
//! - **Catalog**: products, variants, file attachments, paginated pages
//! - **Card**: per-product variant selection and image derivation
//!
//! Everything here is deserialized from a page response and replaced
//! wholesale on the next fetch; nothing mutates the catalog in place.
//!
//! # Example
//!
//! ```rust,ignore
//! use artos_commerce::card::VariantSelection;
//!
//! let mut selection = VariantSelection::new(product)?;
//! selection.select(&other_variant_id);
//!
//! let card = selection.card();
//! println!("{} {}", card.display_name, card.display_price);
//! ```

pub mod card;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod price;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{FileLink, Page, Product, ProductOption, StoredFile, Variant};

    // Card
    pub use crate::card::{Thumbnail, ThumbnailImage, VariantCard, VariantSelection};
}
