//! Store API configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the store API.
///
/// The store identifier is injected here at construction time and
/// travels with the client; nothing in this crate reads it from global
/// state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the store API (e.g. "https://api.artosapp.com").
    pub api_url: String,
    /// Store identifier, sent as both the `storeId` query parameter and
    /// the `x-store-id` header.
    pub store_id: String,
}

impl StoreConfig {
    /// Create a config, trimming any trailing slash off the base URL.
    pub fn new(api_url: impl Into<String>, store_id: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            store_id: store_id.into(),
        }
    }
}
