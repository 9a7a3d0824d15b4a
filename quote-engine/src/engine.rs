//! Engine facade: memoized entry points, one per quote category family
//!
//! All entry points are pure functions of their inputs; the only state is
//! the injected [`MemoCache`], which exists purely to skip recomputation
//! when the same inputs arrive again within the TTL window.

use crate::cache::MemoCache;
use crate::models::{DoorQuoteInputs, LineItem, QuoteInputs, Totals, VatTriple};
use crate::pricing;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Memoized quote pricing engine
///
/// Owns a [`MemoCache`] shared by every entry point; independent engines
/// have independent caches.
#[derive(Debug, Default)]
pub struct QuoteEngine {
    cache: MemoCache,
}

impl QuoteEngine {
    /// Engine with the standard 5-second cache TTL
    pub fn new() -> Self {
        Self {
            cache: MemoCache::new(),
        }
    }

    /// Engine with a caller-provided cache (tests use short TTLs)
    pub fn with_cache(cache: MemoCache) -> Self {
        Self { cache }
    }

    /// Totals for the door category (multi-component rows)
    pub fn door_totals(&self, inputs: &DoorQuoteInputs) -> Totals {
        let key = self.cache.key("dvere:", inputs);
        self.cache
            .get_or_compute(key, || pricing::door_quote_totals(inputs))
    }

    /// Totals for the furniture category
    pub fn furniture_totals(&self, inputs: &QuoteInputs) -> Totals {
        let key = self.cache.key("nabytok:", inputs);
        self.cache
            .get_or_compute(key, || pricing::quote_totals(inputs))
    }

    /// Totals for the stairs category
    pub fn stairs_totals(&self, inputs: &QuoteInputs) -> Totals {
        let key = self.cache.key("schody:", inputs);
        self.cache
            .get_or_compute(key, || pricing::quote_totals(inputs))
    }

    /// Totals for the pocket-door frame category (hardware-only rows)
    pub fn pocket_frame_totals(&self, inputs: &QuoteInputs) -> Totals {
        let key = self.cache.key("puzdra:", inputs);
        self.cache
            .get_or_compute(key, || pricing::quote_totals(inputs))
    }

    /// Reduced net/VAT/gross triple for the accessory category (simple
    /// quantity totals, no discount modeling)
    pub fn accessory_totals(&self, items: &[LineItem]) -> VatTriple {
        self.memoized(&("accessory", items), || pricing::accessory_triple(items))
    }

    /// Memoize an arbitrary computation under the same cache policy
    ///
    /// `deps` is the explicit dependency list; structurally identical
    /// dependencies within the TTL window return the cached result without
    /// invoking `compute` again.
    pub fn memoized<D, T, F>(&self, deps: &D, compute: F) -> T
    where
        D: Serialize + ?Sized,
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let key = self.cache.key("hook:", deps);
        self.cache.get_or_compute(key, compute)
    }

    /// Empty the memoization cache; the only way to guarantee fresh results
    /// within the TTL window
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
