//! Remote store API client.

use artos_commerce::catalog::{Page, Product, Variant};
use artos_commerce::ids::VariantId;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::FetchError;
use crate::response::ProductPageBody;

/// Anything that can serve catalog pages.
///
/// [`CatalogBrowser`](crate::CatalogBrowser) drives this seam; tests
/// substitute scripted sources for the HTTP client.
#[async_trait]
pub trait ProductSource {
    /// Fetch one bounded page of products.
    ///
    /// Implementations must be total: a failure is reported as the
    /// canonical empty page, never as an error or panic.
    async fn fetch_page(&self, page: u32, limit: u32) -> Page<Product>;
}

/// HTTP client for the Artos store API.
///
/// Both fetch paths normalize failures at this boundary. Transport
/// failures, non-2xx statuses, and malformed bodies are treated
/// identically: logged, then collapsed into the canonical empty page
/// (list path) or `None` (variant path). Requests are plain GETs and
/// safe to retry.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    config: StoreConfig,
}

impl StoreClient {
    /// Create a client for the given store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Fetch one page of the product catalog.
    ///
    /// Always yields a renderable page; a failed fetch looks exactly
    /// like a store with zero products.
    pub async fn fetch_page(&self, page: u32, limit: u32) -> Page<Product> {
        match self.try_fetch_page(page, limit).await {
            Ok(result) => {
                debug!(page, limit, items = result.len(), "fetched catalog page");
                result
            }
            Err(error) => {
                warn!(page, limit, %error, "catalog page fetch failed, serving empty page");
                Page::empty(limit)
            }
        }
    }

    /// Fetch a single variant for the detail view.
    ///
    /// Any failure, including a non-2xx status, reads as not found.
    pub async fn fetch_variant(&self, id: &VariantId) -> Option<Variant> {
        match self.try_fetch_variant(id).await {
            Ok(variant) => {
                debug!(variant = %id, "fetched variant");
                Some(variant)
            }
            Err(error) => {
                warn!(variant = %id, %error, "variant fetch failed, treating as not found");
                None
            }
        }
    }

    async fn try_fetch_page(&self, page: u32, limit: u32) -> Result<Page<Product>, FetchError> {
        let url = format!("{}/store/products", self.config.api_url);
        let response = self
            .request(&url)
            .query(&[("storeId", self.config.store_id.as_str())])
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        let body: ProductPageBody = Self::decode(response).await?;
        Ok(body.into_page())
    }

    async fn try_fetch_variant(&self, id: &VariantId) -> Result<Variant, FetchError> {
        let url = format!("{}/store/product-variants/{}", self.config.api_url, id);
        let response = self.request(&url).send().await?;
        Self::decode(response).await
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("x-store-id", &self.config.store_id)
            .header("accept", "application/json")
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProductSource for StoreClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> Page<Product> {
        StoreClient::fetch_page(self, page, limit).await
    }
}
