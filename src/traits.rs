use std::future::Future;

use crate::error::Result;
use crate::types::Product;

/// Trait for product data sources
///
/// Implemented by the live HTTP client and by the in-crate mock, so the list
/// controller can be driven against either.
pub trait ProductSource: Send + Sync {
    /// Fetch the full product collection
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Fetch a single product by id
    fn get_product(&self, id: &str) -> impl Future<Output = Result<Product>> + Send;
}
