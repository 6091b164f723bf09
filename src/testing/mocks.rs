use std::collections::HashMap;

use crate::error::{ApiError, ErrorKind, Result};
use crate::traits::ProductSource;
use crate::types::Product;

/// Mock product source for testing
///
/// Serves a fixed collection or a canned failure, so controller and pipeline
/// behavior can be exercised without a live API.
#[derive(Clone)]
pub struct MockProductSource {
    pub products: Vec<Product>,
    pub products_by_id: HashMap<String, Product>,
    pub failure: Option<ApiError>,
}

impl MockProductSource {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            products_by_id: HashMap::new(),
            failure: None,
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products_by_id = products
            .iter()
            .map(|p| (p.id.clone(), p.clone()))
            .collect();
        self.products = products;
        self
    }

    pub fn with_failure(mut self, failure: ApiError) -> Self {
        self.failure = Some(failure);
        self
    }
}

impl Default for MockProductSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductSource for MockProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        Ok(self.products.clone())
    }

    async fn get_product(&self, id: &str) -> Result<Product> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        if id.is_empty() {
            return Err(ApiError::invalid_params("Product ID is required").with_detail("param", "id"));
        }
        self.products_by_id.get(id).cloned().ok_or_else(|| {
            ApiError::new(
                ErrorKind::NotFound,
                404,
                format!("Request failed: Product {id} not found"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price: 10.0,
            stock: 1,
            category: None,
            image: None,
            specifications: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_mock_serves_collection_and_lookup() {
        let source = MockProductSource::new()
            .with_products(vec![product("1", "First"), product("2", "Second")]);

        let all = source.fetch_products().await.unwrap();
        assert_eq!(all.len(), 2);

        let one = source.get_product("2").await.unwrap();
        assert_eq!(one.name, "Second");
    }

    #[tokio::test]
    async fn test_mock_missing_id_is_not_found() {
        let source = MockProductSource::new().with_products(vec![product("1", "First")]);
        let error = source.get_product("99").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.status(), 404);
    }

    #[tokio::test]
    async fn test_mock_empty_id_is_invalid_params() {
        let source = MockProductSource::new();
        let error = source.get_product("").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidParams);
    }

    #[tokio::test]
    async fn test_mock_injected_failure_wins() {
        let source = MockProductSource::new()
            .with_products(vec![product("1", "First")])
            .with_failure(ApiError::network("injected"));

        assert!(source.fetch_products().await.is_err());
        assert!(source.get_product("1").await.is_err());
    }
}
