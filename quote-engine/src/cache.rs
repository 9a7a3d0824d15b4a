//! Time-bound memoization cache
//!
//! Shared by the engine entry points to avoid redundant recomputation when
//! the engine is invoked repeatedly with unchanged inputs (e.g. on every UI
//! refresh). Keys are a per-entry-point prefix plus a structural
//! serialization of the inputs; values are stored as `serde_json::Value`.
//!
//! The cache is an explicit object rather than global state, so tests can
//! run independent instances in parallel. Entries expire on a wall-clock
//! TTL and the cache is bounded by simple insertion-order eviction.

use crate::util::now_millis;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

/// Key for a memoized computation
///
/// Inputs that fail to serialize get no key at all: both lookup and
/// insertion are skipped, so the miss is guaranteed unconditionally and
/// unreachable entries never occupy the bounded cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheKey {
    /// Entry-point prefix plus a structural serialization of the inputs
    Stable(String),
    /// Input serialization failed; the computation runs uncached
    Uncacheable,
}

/// Cached entries are valid for 5 seconds
pub const DEFAULT_TTL_MS: i64 = 5000;

/// Bound on the number of cached entries
pub const MAX_ENTRIES: usize = 100;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    computed_at: i64,
}

#[derive(Debug, Default)]
struct CacheInner {
    map: HashMap<String, CacheEntry>,
    /// Keys in insertion order, oldest first
    order: VecDeque<String>,
}

/// Bounded, TTL-based memoization cache
#[derive(Debug)]
pub struct MemoCache {
    inner: Mutex<CacheInner>,
    ttl_ms: i64,
}

impl MemoCache {
    /// Cache with the standard 5-second TTL
    pub fn new() -> Self {
        Self::with_ttl_ms(DEFAULT_TTL_MS)
    }

    /// Cache with a custom TTL (used by tests to observe expiry)
    pub fn with_ttl_ms(ttl_ms: i64) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            ttl_ms,
        }
    }

    /// Build a cache key from an entry-point prefix and a structural
    /// serialization of the dependencies
    ///
    /// If serialization fails the key is [`CacheKey::Uncacheable`], which
    /// guarantees a cache miss; serialization failure is never an error.
    pub fn key<D: Serialize + ?Sized>(&self, prefix: &str, deps: &D) -> CacheKey {
        match serde_json::to_string(deps) {
            Ok(serialized) => CacheKey::Stable(format!("{prefix}{serialized}")),
            Err(e) => {
                tracing::debug!(prefix, error = %e, "Cache key serialization failed, forcing miss");
                CacheKey::Uncacheable
            }
        }
    }

    /// Look up a non-expired entry; a stale entry is discarded
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let mut inner = self.lock();
        let fresh = match inner.map.get(key) {
            Some(entry) => now_millis() - entry.computed_at < self.ttl_ms,
            None => return None,
        };
        if fresh {
            return inner.map.get(key).map(|e| e.value.clone());
        }
        inner.map.remove(key);
        inner.order.retain(|k| k != key);
        None
    }

    /// Insert a value, evicting the oldest-inserted entry when the bound
    /// would be exceeded
    pub fn insert(&self, key: String, value: serde_json::Value) {
        let mut inner = self.lock();
        let entry = CacheEntry {
            value,
            computed_at: now_millis(),
        };
        if inner.map.insert(key.clone(), entry).is_some() {
            // Replacement keeps the original insertion position
            return;
        }
        while inner.map.len() > MAX_ENTRIES {
            if let Some(oldest) = inner.order.pop_front() {
                inner.map.remove(&oldest);
            } else {
                break;
            }
        }
        inner.order.push_back(key);
    }

    /// Look up a typed value under `key`, computing and caching it on a miss
    ///
    /// An uncacheable key runs the computation directly, touching neither
    /// lookup nor insertion. A cached value that fails to deserialize is
    /// treated as a miss.
    pub fn get_or_compute<T, F>(&self, key: CacheKey, compute: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let key = match key {
            CacheKey::Stable(key) => key,
            CacheKey::Uncacheable => return compute(),
        };

        if let Some(value) = self.get(&key) {
            match serde_json::from_value(value) {
                Ok(result) => {
                    tracing::trace!(key = %key, "Cache hit");
                    return result;
                }
                Err(e) => {
                    tracing::debug!(key = %key, error = %e, "Cached value failed to deserialize");
                }
            }
        }

        let result = compute();
        match serde_json::to_value(&result) {
            Ok(value) => self.insert(key, value),
            Err(e) => {
                tracing::debug!(error = %e, "Computed value not cacheable");
            }
        }
        result
    }

    /// Empty the cache synchronously
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.map.clear();
        inner.order.clear();
    }

    /// Number of live entries (expired entries still count until touched)
    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        // A poisoned lock only means a panic mid-update elsewhere; the map
        // itself is still structurally sound
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new()
    }
}
