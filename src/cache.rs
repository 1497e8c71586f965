//! TTL bounded fetch cache shared between concurrent query executions.
//! Entries expire lazily: a stale entry reads as a miss and is only
//! dropped when a later `set` replaces it. The cache itself never errors;
//! a miss is a normal outcome the caller answers with a fresh fetch.

use crate::grid::Grid;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;
use std::time::Duration;
use std::time::Instant;

/// One cached spreadsheet range.
struct CacheEntry {
    grid: Arc<Grid>,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// Remaining time before the entry goes stale, None once expired.
    fn expires_in(&self, now: Instant) -> Option<Duration> {
        self.ttl
            .checked_sub(now.duration_since(self.stored_at))
            .filter(|left| !left.is_zero())
    }
}

/// A successful cache lookup.
#[derive(Clone, Debug)]
pub struct CacheHit {
    pub grid: Arc<Grid>,
    /// Remaining time before the entry would expire
    pub expires_in: Duration,
}

/// In-memory key/value store for fetched grids, bounded by a per-entry
/// time-to-live. Safe to share across threads; construct one explicitly
/// and hand it to every query execution.
#[derive(Default)]
pub struct FetchCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl FetchCache {
    pub fn new() -> Self {
        FetchCache::default()
    }

    /// Cache key for a spreadsheet range: the identifier and range
    /// concatenated verbatim, with no normalization of the range syntax.
    pub fn key(spreadsheet_id: &str, range: &str) -> String {
        format!("{spreadsheet_id}{range}")
    }

    /// Looks up a key, reporting the cached grid and its remaining
    /// time-to-expiry. Absent and expired entries both read as a miss.
    pub fn get(&self, key: &str) -> Option<CacheHit> {
        let entries = self.entries.read().expect("cache lock");
        let entry = entries.get(key)?;
        let expires_in = entry.expires_in(Instant::now())?;
        tracing::debug!(key, ?expires_in, "fetch cache hit");
        Some(CacheHit {
            grid: Arc::clone(&entry.grid),
            expires_in,
        })
    }

    /// Stores a grid under the key, replacing any previous entry. A zero
    /// ttl means "do not cache": the store is left untouched and the key
    /// keeps reading as a miss.
    pub fn set(&self, key: &str, grid: Arc<Grid>, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }
        tracing::debug!(key, ?ttl, "fetch cache store");
        let mut entries = self.entries.write().expect("cache lock");
        entries.insert(
            key.to_owned(),
            CacheEntry {
                grid,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
