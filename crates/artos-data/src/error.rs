//! Store API failure taxonomy.
//!
//! These errors stay inside the crate: the page path collapses them into
//! the canonical empty page and the variant path into `None`, each with
//! a warning log at the collapse point.

use thiserror::Error;

/// Ways a store API request can fail.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body did not match the expected shape.
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
