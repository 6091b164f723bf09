use serde::{Deserialize, Serialize};

/// Image shown for products that carry no image URL of their own.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200";

/// One named attribute of a product, e.g. `{"name": "Weight", "value": "2kg"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

/// A product as served by the catalog API.
///
/// Products are treated as immutable snapshots: the client never edits one in
/// place, it replaces the whole collection on re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    /// Absent for uncategorized products; those only match the "all" filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specifications: Vec<Specification>,
}

impl Product {
    /// URL to display for this product, falling back to the shared
    /// placeholder when no image is set.
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Whether any stock is available.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}
