//! Shared test utilities for catalog-client integration tests
//!
//! Provides product factories and wiremock helpers so individual test files
//! stay focused on the behavior under test.

use catalog_client::{ApiClient, ClientConfig, Product};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create a product with the fields tests care about
pub fn create_product(id: &str, name: &str, price: f64, stock: u32, category: Option<&str>) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        price,
        stock,
        category: category.map(str::to_string),
        image: None,
        specifications: Vec::new(),
    }
}

/// A small catalog covering the cases filters and sorts distinguish:
/// mixed categories, an uncategorized product, a zero-stock product.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        create_product("1", "Wireless Mouse", 29.99, 15, Some("electronics")),
        create_product("2", "Standing Desk", 499.0, 0, Some("furniture")),
        create_product("3", "USB-C Cable", 12.5, 40, Some("electronics")),
        create_product("4", "Gift Card", 50.0, 100, None),
    ]
}

/// The sample catalog as the JSON body the API would serve.
pub fn sample_catalog_json() -> Value {
    serde_json::to_value(sample_catalog()).unwrap()
}

/// Start a mock server answering `GET /products` with `body`.
pub async fn server_with_products(body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Start a mock server answering `GET /products` with `status` and `body`.
pub async fn server_with_error(status: u16, body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Client pointed at a mock server, with the default timeout.
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.uri())).unwrap()
}

/// Ids of a derived or fetched product slice, in order.
pub fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}
