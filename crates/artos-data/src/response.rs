//! Wire envelopes for store API responses.

use artos_commerce::catalog::{Page, Product};
use serde::Deserialize;

/// The `GET /store/products` response body.
///
/// The wire also carries a `links` object with pre-built page URLs; the
/// core navigates by page number instead, so it is ignored here.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductPageBody {
    #[serde(default)]
    pub data: Vec<Product>,
    pub meta: PageMeta,
}

/// Pagination metadata as the API reports it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageMeta {
    pub items_per_page: u32,
    pub total_items: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

impl ProductPageBody {
    /// Flatten the envelope into the domain page type.
    pub fn into_page(self) -> Page<Product> {
        Page::new(
            self.data,
            self.meta.current_page,
            self.meta.total_pages,
            self.meta.total_items,
            self.meta.items_per_page,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_flattens_to_page() {
        let json = r#"{
            "data": [],
            "meta": {
                "itemsPerPage": 9,
                "totalItems": 20,
                "currentPage": 2,
                "totalPages": 3
            },
            "links": {"current": "/store/products?page=2"}
        }"#;

        let body: ProductPageBody = serde_json::from_str(json).unwrap();
        let page = body.into_page();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 20);
        assert_eq!(page.items_per_page, 9);
    }

    #[test]
    fn test_missing_meta_is_malformed() {
        let json = r#"{"data": []}"#;
        assert!(serde_json::from_str::<ProductPageBody>(json).is_err());
    }
}
