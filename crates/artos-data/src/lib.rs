//! Remote data access for Artos storefronts.
//!
//! [`StoreClient`] talks to the store API and normalizes every failure
//! into a renderable value: the page path degrades to the canonical
//! empty page and the single-variant path to `None`. Nothing in this
//! crate raises past those boundaries.
//!
//! [`CatalogBrowser`] layers page navigation on top of any
//! [`ProductSource`], enforcing the one ordering invariant of the core:
//! when navigation requests overlap, the last issued request's result is
//! authoritative and stale responses are discarded.
//!
//! # Example
//!
//! ```rust,ignore
//! use artos_data::{CatalogBrowser, StoreClient, StoreConfig};
//!
//! let client = StoreClient::new(StoreConfig::new(
//!     "https://api.artosapp.com",
//!     "my-store-id",
//! ));
//!
//! let mut browser = CatalogBrowser::new(client, 9);
//! browser.go_to(1).await;
//! for product in &browser.current().items {
//!     println!("{}", product.name);
//! }
//! ```

mod client;
mod config;
mod error;
mod pagination;
mod response;

pub use client::{ProductSource, StoreClient};
pub use config::StoreConfig;
pub use error::FetchError;
pub use pagination::{Applied, CatalogBrowser, PageRequest};
