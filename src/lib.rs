//! Catalog Client - product API access and derived-view pipeline
//!
//! This crate provides a typed HTTP client for a product catalog API, a
//! closed error taxonomy covering every way a fetch can fail, and a pure
//! filter/sort engine driven by a list controller that falls back to
//! placeholder data when the live fetch is unavailable.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod client;
pub mod controller;
pub mod fallback;
pub mod filter;
pub mod traits;

// Test support
pub mod testing;

// Re-export main types for convenience
pub use client::ApiClient;
pub use config::ClientConfig;
pub use controller::{FetchState, LoadTicket, ProductListController};
pub use error::{ApiError, ErrorCategory, ErrorKind, Result};
pub use fallback::{fallback_products, FALLBACK_WARNING};
pub use filter::{
    derive_view, FilterState, PriceRange, SortDirection, SortKey, SortSpec, CATEGORY_ALL,
};
pub use traits::ProductSource;
pub use types::{Product, Specification, PLACEHOLDER_IMAGE};

/// Fetch the full product collection using environment-based configuration
pub async fn fetch_products() -> Result<Vec<Product>> {
    let client = ApiClient::from_env()?;
    client.fetch_products().await
}

/// Fetch a single product by id using environment-based configuration
pub async fn get_product(id: &str) -> Result<Product> {
    let client = ApiClient::from_env()?;
    client.get_product(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that all modules can be imported and basic types work
    #[test]
    fn test_module_imports() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, config::DEFAULT_BASE_URL);

        let filter = FilterState::default();
        assert_eq!(filter.category, CATEGORY_ALL);
        assert_eq!(filter.price_range, PriceRange::FULL);
        assert!(!filter.in_stock);

        let sort = SortSpec::default();
        assert_eq!(sort.key, SortKey::Name);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    /// Test that error types work correctly
    #[test]
    fn test_error_types() {
        let error = ApiError::invalid_params("Product ID is required");
        assert_eq!(error.kind(), ErrorKind::InvalidParams);
        assert_eq!(error.status(), 400);
        assert!(error.to_string().contains("Product ID"));
    }
}
