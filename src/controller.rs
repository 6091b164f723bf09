use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::Result;
use crate::fallback::{fallback_products, FALLBACK_WARNING};
use crate::filter::{derive_view, FilterState, PriceRange, SortDirection, SortKey, SortSpec};
use crate::traits::ProductSource;
use crate::types::Product;

/// Fetch lifecycle of the product list.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// No fetch has completed yet.
    Loading,
    /// The live fetch succeeded; the collection may be empty.
    Ready(Vec<Product>),
    /// The live fetch failed; the fallback dataset is active.
    ErrorFallback {
        products: Vec<Product>,
        warning: String,
    },
}

/// Identity of one issued fetch.
///
/// A completed fetch is applied only if its ticket is still the most recently
/// issued one, so a slow response can never overwrite the result of a fetch
/// started after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owns the product list state: fetch lifecycle, filter facets, sort
/// selection, and the derived list computed from them.
///
/// The derived list is recomputed synchronously whenever the active product
/// set, a facet, or the sort selection changes; readers never observe a
/// stale combination.
pub struct ProductListController<S> {
    source: S,
    state: FetchState,
    filter: FilterState,
    sort: SortSpec,
    derived: Vec<Product>,
    generation: u64,
    cancel: CancellationToken,
}

impl<S: ProductSource> ProductListController<S> {
    /// Create a controller in the `Loading` state with default facets
    /// (category "all", full price range, in-stock off) and default sort
    /// (name ascending).
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: FetchState::Loading,
            filter: FilterState::default(),
            sort: SortSpec::default(),
            derived: Vec::new(),
            generation: 0,
            cancel: CancellationToken::new(),
        }
    }

    /// Fetch the collection and apply the outcome.
    ///
    /// Failures are non-fatal: the controller lands in
    /// [`FetchState::ErrorFallback`] with placeholder data instead of
    /// surfacing the error. Returns early without touching state if the
    /// controller was shut down.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = tokio::select! {
            // Shutdown wins over an already-completed fetch.
            biased;
            _ = self.cancel.cancelled() => {
                debug!("Load cancelled by shutdown");
                return;
            }
            result = self.source.fetch_products() => result,
        };
        self.apply_load(ticket, result);
    }

    /// Stamp a new fetch, superseding any outstanding one.
    ///
    /// Callers that drive the fetch themselves (e.g. from a spawned task)
    /// take a ticket here and hand it back to
    /// [`apply_load`](Self::apply_load) with the result; [`load`](Self::load)
    /// does both ends for the common case.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Apply a completed fetch. Returns whether the result was applied;
    /// results carrying a superseded ticket are discarded unchanged.
    pub fn apply_load(&mut self, ticket: LoadTicket, result: Result<Vec<Product>>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "Discarding stale fetch result"
            );
            return false;
        }
        match result {
            Ok(products) => {
                debug!(count = products.len(), "Product fetch applied");
                self.state = FetchState::Ready(products);
            }
            Err(error) => {
                warn!(
                    error = %error,
                    kind = %error.kind(),
                    status = error.status(),
                    "Product fetch failed, activating fallback dataset"
                );
                self.state = FetchState::ErrorFallback {
                    products: fallback_products(),
                    warning: FALLBACK_WARNING.to_string(),
                };
            }
        }
        self.recompute();
        true
    }

    /// Set the category facet; `"all"` clears the restriction.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
        self.recompute();
    }

    /// Set the inclusive price bounds. Reversed endpoints are reordered.
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.filter.price_range = PriceRange::new(min, max);
        self.recompute();
    }

    /// Toggle the in-stock facet.
    pub fn set_in_stock(&mut self, in_stock: bool) {
        self.filter.in_stock = in_stock;
        self.recompute();
    }

    /// Select the sort key.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort.key = key;
        self.recompute();
    }

    /// Select the sort direction.
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort.direction = direction;
        self.recompute();
    }

    /// Current fetch lifecycle state.
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// The derived (filtered and sorted) product list. Empty while loading.
    pub fn derived_products(&self) -> &[Product] {
        &self.derived
    }

    /// The active unfiltered product set backing the derived list.
    pub fn products(&self) -> &[Product] {
        self.active_products()
    }

    /// Warning text when the fallback dataset is active, `None` otherwise.
    pub fn warning(&self) -> Option<&str> {
        match &self.state {
            FetchState::ErrorFallback { warning, .. } => Some(warning),
            _ => None,
        }
    }

    /// Current filter facets.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current sort selection.
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Child token cancelled when this controller shuts down. Tasks spawned
    /// to drive [`begin_load`](Self::begin_load)/[`apply_load`](Self::apply_load)
    /// should race their fetch against it.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.child_token()
    }

    /// Cancel in-flight work. Idempotent; also runs on drop.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    fn active_products(&self) -> &[Product] {
        match &self.state {
            FetchState::Loading => &[],
            FetchState::Ready(products) => products,
            FetchState::ErrorFallback { products, .. } => products,
        }
    }

    /// Recompute the derived list as a pure function of the current state.
    fn recompute(&mut self) {
        let derived = derive_view(self.active_products(), &self.filter, &self.sort);
        self.derived = derived;
    }
}

impl<S> Drop for ProductListController<S> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
