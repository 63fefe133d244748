//! Product catalog types.
//!
//! Everything in this module mirrors the store API wire format and is
//! created by deserializing a page or variant response.

mod page;
mod product;

pub use page::Page;
pub use product::{FileLink, Product, ProductOption, StoredFile, Variant};
