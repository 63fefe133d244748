//! Integration tests for `StoreClient` against a local mock API.

use artos_commerce::catalog::Page;
use artos_commerce::ids::VariantId;
use artos_data::{StoreClient, StoreConfig};
use httpmock::prelude::*;
use serde_json::json;

const STORE_ID: &str = "d96f13bb-acca-4aa1-b5d5-996cd58d7bd5";

fn client_for(server: &MockServer) -> StoreClient {
    StoreClient::new(StoreConfig::new(server.base_url(), STORE_ID))
}

fn product_page_body() -> serde_json::Value {
    json!({
        "data": [{
            "id": "p1",
            "name": "Mug",
            "description": "A mug",
            "slug": "mug",
            "variants": [{
                "id": "v1",
                "name": "Blue Mug",
                "sku": "MUG-B",
                "price": 12.5,
                "stock": 3,
                "files": [{
                    "id": "l1",
                    "priority": 0,
                    "file": {
                        "id": "f1",
                        "path": "/img/mug-blue.png",
                        "mimeType": "image/png",
                        "fileName": "mug-blue.png"
                    }
                }],
                "productOptions": [{"id": "o1", "name": "Blue", "code": "blue"}]
            }],
            "files": []
        }],
        "meta": {"itemsPerPage": 9, "totalItems": 1, "currentPage": 1, "totalPages": 1},
        "links": {"current": "/store/products?page=1&limit=9"}
    })
}

#[tokio::test]
async fn fetch_page_decodes_products_and_sends_store_identity() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/store/products")
            .header("x-store-id", STORE_ID)
            .query_param("storeId", STORE_ID)
            .query_param("page", "1")
            .query_param("limit", "9");
        then.status(200).json_body(product_page_body());
    });

    let page = client_for(&server).fetch_page(1, 9).await;

    mock.assert();
    assert_eq!(page.len(), 1);
    assert_eq!(page.total_items, 1);
    let product = &page.items[0];
    assert_eq!(product.name, "Mug");
    assert_eq!(product.variants[0].price, 12.5);
    assert_eq!(product.variants[0].files[0].file.path, "/img/mug-blue.png");
}

#[tokio::test]
async fn fetch_page_is_idempotent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/store/products");
        then.status(200).json_body(product_page_body());
    });

    let client = client_for(&server);
    let first = client.fetch_page(1, 9).await;
    let second = client.fetch_page(1, 9).await;

    mock.assert_hits(2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn server_error_yields_canonical_empty_page() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/store/products");
        then.status(500).body("internal error");
    });

    let page = client_for(&server).fetch_page(1, 9).await;
    assert_eq!(page, Page::empty(9));
}

#[tokio::test]
async fn malformed_body_yields_canonical_empty_page() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/store/products");
        then.status(200).body("not json at all");
    });

    let page = client_for(&server).fetch_page(2, 5).await;
    assert_eq!(page, Page::empty(5));
}

#[tokio::test]
async fn transport_failure_yields_canonical_empty_page() {
    // Nothing listens on this address; the connection is refused.
    let client = StoreClient::new(StoreConfig::new("http://127.0.0.1:9", STORE_ID));

    let page = client.fetch_page(1, 9).await;
    assert_eq!(page, Page::empty(9));
}

#[tokio::test]
async fn fetch_variant_decodes_string_price() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/store/product-variants/v2")
            .header("x-store-id", STORE_ID);
        then.status(200).json_body(json!({
            "id": "v2",
            "name": "Deluxe Mug",
            "sku": "MUG-D",
            "price": "15.50",
            "stock": 0,
            "files": [],
            "productOptions": []
        }));
    });

    let variant = client_for(&server)
        .fetch_variant(&VariantId::new("v2"))
        .await
        .expect("variant should be found");

    mock.assert();
    assert_eq!(variant.price, 15.5);
    assert_eq!(variant.stock, Some(0));
    assert_eq!(variant.stock_label(), "0");
}

#[tokio::test]
async fn missing_variant_reads_as_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/store/product-variants/ghost");
        then.status(404).body("not found");
    });

    let variant = client_for(&server).fetch_variant(&VariantId::new("ghost")).await;
    assert!(variant.is_none());
}
