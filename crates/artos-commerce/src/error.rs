//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur when working with catalog snapshots.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A product arrived without any variants, so no card can be built
    /// for it.
    #[error("product {0} has no variants")]
    ProductWithoutVariants(ProductId),
}
