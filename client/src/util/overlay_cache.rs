//! Bounded, time-limited cache of overlay filter results.
//!
//! DESIGN
//! ======
//! Filtering walks every position of every feature, so repeated submits of
//! the same box reuse the previous result. Entries are keyed by
//! [`FilterRequest`], expire a fixed time after insertion, and the oldest
//! entry is evicted when the cache is full. Callers pass the current time in
//! milliseconds so the cache itself never touches a clock.

#[cfg(test)]
#[path = "overlay_cache_test.rs"]
mod overlay_cache_test;

use std::collections::VecDeque;

use super::geo::GeoData;
use super::overlay::FilterRequest;

/// Maximum number of cached results.
pub const OVERLAY_CACHE_CAPACITY: usize = 10;

/// Lifetime of a cached result, in milliseconds.
pub const OVERLAY_CACHE_TTL_MS: f64 = 60_000.0;

#[derive(Clone, Debug)]
struct CacheEntry {
    request: FilterRequest,
    inserted_at_ms: f64,
    data: GeoData,
}

/// Hit/miss counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Clone, Debug)]
pub struct OverlayCache {
    capacity: usize,
    ttl_ms: f64,
    entries: VecDeque<CacheEntry>,
    stats: CacheStats,
}

impl Default for OverlayCache {
    fn default() -> Self {
        Self::new(OVERLAY_CACHE_CAPACITY, OVERLAY_CACHE_TTL_MS)
    }
}

impl OverlayCache {
    #[must_use]
    pub fn new(capacity: usize, ttl_ms: f64) -> Self {
        Self { capacity: capacity.max(1), ttl_ms, entries: VecDeque::new(), stats: CacheStats::default() }
    }

    /// Return the cached result for `request`, computing and storing it with
    /// `load` when absent or expired.
    pub fn get_or_load(&mut self, request: FilterRequest, now_ms: f64, load: impl FnOnce(&FilterRequest) -> GeoData) -> GeoData {
        self.evict_expired(now_ms);
        if let Some(entry) = self.entries.iter().find(|e| e.request == request) {
            self.stats.hits += 1;
            return entry.data.clone();
        }

        self.stats.misses += 1;
        let data = load(&request);
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(CacheEntry { request, inserted_at_ms: now_ms, data: data.clone() });
        data
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    fn evict_expired(&mut self, now_ms: f64) {
        let ttl_ms = self.ttl_ms;
        self.entries.retain(|e| now_ms - e.inserted_at_ms < ttl_ms);
    }
}
