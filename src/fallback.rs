//! Placeholder products used when the live fetch fails.

use crate::types::{Product, PLACEHOLDER_IMAGE};

/// Warning recorded alongside the fallback dataset so consumers can tell the
/// user they are looking at placeholder data.
pub const FALLBACK_WARNING: &str = "Failed to load products. Using placeholder data instead.";

/// The fixed fallback dataset.
///
/// Never empty, and every entry survives the default filter state, so the
/// filter/sort pipeline stays functional when the API is unreachable.
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Sample Product 1".to_string(),
            description: "This is a sample product description.".to_string(),
            price: 99.99,
            stock: 10,
            category: None,
            image: Some(PLACEHOLDER_IMAGE.to_string()),
            specifications: Vec::new(),
        },
        Product {
            id: "2".to_string(),
            name: "Sample Product 2".to_string(),
            description: "Another sample product description.".to_string(),
            price: 149.99,
            stock: 5,
            category: None,
            image: Some(PLACEHOLDER_IMAGE.to_string()),
            specifications: Vec::new(),
        },
    ]
}
