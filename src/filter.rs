use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// Sentinel category meaning "no category restriction".
pub const CATEGORY_ALL: &str = "all";

/// Inclusive price bounds for the price facet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// The full price domain. This is the default selection, so the price
    /// facet is always applied; products priced outside it are filtered out
    /// even when the user touched nothing.
    pub const FULL: PriceRange = PriceRange { min: 0.0, max: 1000.0 };

    /// Range from two endpoints, reordered if given reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Whether `price` lies within the bounds. Both endpoints included.
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// The three independent filter facets.
///
/// Every facet is always populated; there is no "unset" facet. Defaults are
/// chosen so the default state excludes nothing priced within
/// [`PriceRange::FULL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Exact, case-sensitive category match; [`CATEGORY_ALL`] disables it.
    pub category: String,
    pub price_range: PriceRange,
    /// When `true`, keep only products with `stock > 0`.
    pub in_stock: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            price_range: PriceRange::FULL,
            in_stock: false,
        }
    }
}

impl FilterState {
    /// Whether the category facet currently restricts anything.
    pub fn has_category_restriction(&self) -> bool {
        self.category != CATEGORY_ALL
    }

    /// Whether `product` survives all three facets.
    pub fn retains(&self, product: &Product) -> bool {
        if self.has_category_restriction()
            && product.category.as_deref() != Some(self.category.as_str())
        {
            return false;
        }
        if !self.price_range.contains(product.price) {
            return false;
        }
        if self.in_stock && product.stock == 0 {
            return false;
        }
        true
    }
}

/// Field the derived list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Price,
    Stock,
}

/// Direction applied to the selected comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort selection for the derived list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Compare two products under this selection. Descending reverses the
    /// comparator only, so equal-key products keep their relative order in
    /// both directions under a stable sort.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Stock => a.stock.cmp(&b.stock),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Caseless lexicographic name comparison with a raw-byte tiebreak, standing
/// in for locale collation so that "apple" sorts next to "Apple" rather than
/// after "Zebra".
fn compare_names(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Derive the displayed list from the full product set plus the current
/// filter facets and sort selection.
///
/// Pure and deterministic: inputs are never mutated, no I/O happens, and the
/// same inputs always produce the same output, order included. Facets apply
/// in sequence (category, price, stock), then a stable sort orders the
/// survivors.
pub fn derive_view(products: &[Product], filter: &FilterState, sort: &SortSpec) -> Vec<Product> {
    let mut derived: Vec<Product> = products
        .iter()
        .filter(|product| filter.retains(product))
        .cloned()
        .collect();

    derived.sort_by(|a, b| sort.compare(a, b));
    derived
}
