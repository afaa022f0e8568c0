// SPDX-License-Identifier: MPL-2.0
//! Thumbnail cache for the results grid.
//!
//! Decoded thumbnails are kept in memory so paging back and forth over the
//! same results does not download them again. Search responses themselves
//! are never cached.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently displayed thumbnails are evicted first
//! - **Entry-bounded**: Capacity comes from `display.thumbnail_cache_entries`
//! - **URL-keyed**: Thumbnails are indexed by their source URL
//! - **Pending set**: A URL being downloaded is claimed once, so a re-render
//!   never starts a duplicate download

use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;

/// Statistics about thumbnail cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThumbnailStats {
    /// Lookups that found a thumbnail.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Thumbnails dropped to make room.
    pub evictions: u64,
    /// Thumbnails stored.
    pub insertions: u64,
}

impl ThumbnailStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for ThumbnailStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hits, {} misses ({:.0}% hit rate), {} stored, {} evicted",
            self.hits,
            self.misses,
            self.hit_rate(),
            self.insertions,
            self.evictions
        )
    }
}

/// LRU cache of decoded thumbnails keyed by URL.
#[derive(Debug)]
pub struct ThumbnailCache {
    cache: LruCache<String, Handle>,
    pending: HashSet<String>,
    stats: ThumbnailStats,
}

impl ThumbnailCache {
    /// Creates a cache holding at most `capacity` thumbnails (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            pending: HashSet::new(),
            stats: ThumbnailStats::default(),
        }
    }

    /// Looks up a thumbnail without touching the LRU order.
    ///
    /// Used from `view`, which only has shared access.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&Handle> {
        self.cache.peek(url)
    }

    /// Looks up a thumbnail and marks it as recently used.
    pub fn get(&mut self, url: &str) -> Option<Handle> {
        if let Some(handle) = self.cache.get(url) {
            self.stats.hits += 1;
            Some(handle.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Returns the URLs that still need downloading and marks them pending.
    ///
    /// Cached URLs are promoted in the LRU order so the current page is the
    /// last to be evicted. URLs already pending and duplicates are skipped.
    pub fn claim_missing<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut claimed = Vec::new();
        for url in urls {
            if self.get(url).is_some() || self.pending.contains(url) {
                continue;
            }
            self.pending.insert(url.to_string());
            claimed.push(url.to_string());
        }
        claimed
    }

    /// Stores a downloaded thumbnail and clears its pending mark.
    pub fn insert(&mut self, url: String, handle: Handle) {
        self.pending.remove(&url);
        if let Some((evicted, _)) = self.cache.push(url.clone(), handle) {
            if evicted != url {
                self.stats.evictions += 1;
            }
        }
        self.stats.insertions += 1;
    }

    /// Clears the pending mark of a failed download so it can be retried.
    pub fn release(&mut self, url: &str) {
        self.pending.remove(url);
    }

    /// Returns true while `url` is being downloaded.
    #[must_use]
    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    #[must_use]
    pub fn stats(&self) -> ThumbnailStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(tag: u8) -> Handle {
        Handle::from_bytes(vec![tag])
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        assert_eq!(ThumbnailCache::new(0).capacity(), 1);
    }

    #[test]
    fn claim_marks_urls_pending_once() {
        let mut cache = ThumbnailCache::new(8);

        let first = cache.claim_missing(["u1", "u2", "u1"]);
        assert_eq!(first, vec!["u1".to_string(), "u2".to_string()]);
        assert!(cache.is_pending("u1"));

        let second = cache.claim_missing(["u1", "u2", "u3"]);
        assert_eq!(second, vec!["u3".to_string()]);
    }

    #[test]
    fn insert_clears_pending_and_skips_future_claims() {
        let mut cache = ThumbnailCache::new(8);
        cache.claim_missing(["u1"]);
        cache.insert("u1".into(), handle(1));

        assert!(!cache.is_pending("u1"));
        assert!(cache.peek("u1").is_some());
        assert!(cache.claim_missing(["u1"]).is_empty());
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn released_url_can_be_claimed_again() {
        let mut cache = ThumbnailCache::new(8);
        cache.claim_missing(["u1"]);
        cache.release("u1");
        assert_eq!(cache.claim_missing(["u1"]), vec!["u1".to_string()]);
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let mut cache = ThumbnailCache::new(2);
        cache.insert("u1".into(), handle(1));
        cache.insert("u2".into(), handle(2));
        assert!(cache.get("u1").is_some());

        cache.insert("u3".into(), handle(3));

        assert!(cache.peek("u1").is_some());
        assert!(cache.peek("u2").is_none());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn reinserting_same_url_is_not_an_eviction() {
        let mut cache = ThumbnailCache::new(2);
        cache.insert("u1".into(), handle(1));
        cache.insert("u1".into(), handle(2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn hit_rate_is_zero_without_lookups() {
        assert_eq!(ThumbnailStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn stats_display_summarizes_counters() {
        let mut cache = ThumbnailCache::new(1);
        cache.claim_missing(["u1"]);
        cache.insert("u1".into(), handle(1));
        cache.claim_missing(["u1", "u2"]);
        cache.insert("u2".into(), handle(2));

        assert_eq!(
            cache.stats().to_string(),
            "1 hits, 2 misses (33% hit rate), 2 stored, 1 evicted"
        );
    }
}
