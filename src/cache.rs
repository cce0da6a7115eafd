//! In-memory ETag cache.
//!
//! Entries are keyed by a request [`Fingerprint`](crate::request::Fingerprint) and hold the
//! last `ETag` ESI sent together with the response it belonged to. Nothing expires on its own;
//! entries live until they are overwritten or cleared.

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;

use crate::response::Response;

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CacheEntry {
    pub etag: String,
    pub response: Response,
    pub timestamp: DateTime<Utc>,
}

/// Snapshot of the cache returned by [`EtagCache::stats`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct CacheStats {
    pub size: usize,
    /// Sorted fingerprints.
    pub keys: Vec<String>,
    /// Sorted by key.
    pub entries: Vec<EntryStats>,
}

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct EntryStats {
    pub key: String,
    pub etag: String,
    pub timestamp: DateTime<Utc>,
    pub age: TimeDelta,
}

/// Concurrent fingerprint to [`CacheEntry`] map.
///
/// Concurrent writers to the same fingerprint race; the last store wins.
#[derive(Debug, Default)]
pub struct EtagCache {
    entries: DashMap<String, CacheEntry>,
}

impl EtagCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the entry for `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CacheEntry> {
        if let Some(entry) = self.entries.get(key) {
            #[cfg(feature = "tracing")]
            tracing::trace!(key = %key, etag = %entry.etag, "cache hit");
            return Some(entry.value().clone());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(key = %key, "cache miss");

        None
    }

    /// Inserts or overwrites the entry for `key`, stamped with the current time.
    pub fn store(&self, key: impl Into<String>, etag: impl Into<String>, response: Response) {
        let key = key.into();
        let etag = etag.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(key = %key, etag = %etag, "cached response");

        self.entries.insert(
            key,
            CacheEntry {
                etag,
                response,
                timestamp: Utc::now(),
            },
        );
    }

    /// Removes the entry for `key`, returning whether it existed.
    pub fn remove(&self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();

        #[cfg(feature = "tracing")]
        tracing::debug!(key = %key, removed, "cleared cache entry");

        removed
    }

    /// Removes every entry, returning how many were removed.
    pub fn clear_all(&self) -> usize {
        let mut removed = 0_usize;
        self.entries.retain(|_, _| {
            removed += 1;
            false
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(removed, "cleared cache");

        removed
    }

    /// Clears one entry when `key` is given, otherwise everything. Returns the number removed.
    pub fn clear(&self, key: Option<&str>) -> usize {
        match key {
            Some(key) => usize::from(self.remove(key)),
            None => self.clear_all(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let now = Utc::now();
        let mut entries: Vec<EntryStats> = self
            .entries
            .iter()
            .map(|entry| EntryStats {
                key: entry.key().clone(),
                etag: entry.etag.clone(),
                timestamp: entry.timestamp,
                age: now - entry.timestamp,
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        CacheStats {
            size: entries.len(),
            keys: entries.iter().map(|e| e.key.clone()).collect(),
            entries,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
