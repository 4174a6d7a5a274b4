//! Conversion cache for callers that re-render on every edit.
//!
//! Conversion is a pure function of the source text, so results (including
//! failures) can be reused whenever the same text comes back, e.g. when a
//! preview switches between open files. The cache is owned by the caller;
//! [`convert`](crate::convert) never consults it.
//!
//! The cache holds at most `capacity` entries. Inserting into a full cache
//! first evicts down to half capacity.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::convert::convert_with_config;
use crate::hash::StableHasher;
use crate::render::RenderConfig;

// =============================================================================
// Cache Key
// =============================================================================

/// Content-addressed cache key: blake3 digest of the source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey([u8; 32]);

impl CacheKey {
    /// Compute the key for a source text.
    pub fn for_source(source: &str) -> Self {
        Self(StableHasher::new().update_str(source).finish())
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0[..8] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CacheKey({self})")
    }
}

// =============================================================================
// Cache Entry
// =============================================================================

/// A cached conversion outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The SVG text, or `None` if conversion failed.
    pub svg: Option<Arc<str>>,
}

impl CacheEntry {
    /// Create an entry from a conversion result.
    pub fn new(svg: Option<String>) -> Self {
        Self {
            svg: svg.map(Arc::from),
        }
    }

    /// Whether the cached conversion failed.
    pub fn is_failure(&self) -> bool {
        self.svg.is_none()
    }
}

// =============================================================================
// SVG Cache
// =============================================================================

/// Non-thread-safe conversion cache.
pub type SvgCache = FxHashMap<CacheKey, CacheEntry>;

/// Default maximum number of cached documents
pub const DEFAULT_CAPACITY: usize = 64;

/// Thread-safe shared conversion cache.
///
/// Uses `parking_lot::RwLock` for better performance under contention.
/// Every entry was produced with the cache's [`RenderConfig`].
#[derive(Debug, Clone)]
pub struct SharedSvgCache {
    inner: Arc<RwLock<SvgCache>>,
    config: Arc<RenderConfig>,
    capacity: usize,
}

impl Default for SharedSvgCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedSvgCache {
    /// Create a new empty cache using the default render config.
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a new empty cache using `config` for every conversion.
    pub fn with_config(config: RenderConfig) -> Self {
        Self::with_capacity(config, DEFAULT_CAPACITY)
    }

    /// Create a new empty cache holding at most `capacity` documents.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(config: RenderConfig, capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(FxHashMap::default())),
            config: Arc::new(config),
            capacity: capacity.max(1),
        }
    }

    /// The render config entries are produced with.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Execute a closure with read access to the cache.
    pub fn with_read<R>(&self, f: impl FnOnce(&SvgCache) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with write access to the cache.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut SvgCache) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Get a clone of a cached entry.
    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.with_read(|c| c.get(key).cloned())
    }

    /// Insert or update a cache entry, evicting if the cache is full.
    pub fn insert(&self, key: CacheKey, entry: CacheEntry) {
        let capacity = self.capacity;
        self.with_write(|c| {
            if c.len() >= capacity && !c.contains_key(&key) {
                evict(c, capacity / 2);
            }
            c.insert(key, entry);
        });
    }

    /// Convert `source`, reusing a cached result for identical text.
    ///
    /// The lock is not held while converting; two threads racing on the same
    /// new text may both convert it, and they produce the same entry.
    pub fn get_or_convert(&self, source: &str) -> Option<Arc<str>> {
        let key = CacheKey::for_source(source);
        if let Some(entry) = self.get(&key) {
            trace!(%key, "svg cache hit");
            return entry.svg;
        }

        trace!(%key, "svg cache miss");
        let entry = CacheEntry::new(convert_with_config(source, &self.config));
        let svg = entry.svg.clone();
        self.insert(key, entry);
        svg
    }

    /// Remove an entry from the cache.
    pub fn remove(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.with_write(|c| c.remove(key))
    }

    /// Check if the cache contains a key.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.with_read(|c| c.contains_key(key))
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.with_read(|c| c.len())
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries from the cache.
    pub fn clear(&self) {
        self.with_write(|c| c.clear());
    }
}

/// Drop arbitrary entries until at most `target` remain.
fn evict(cache: &mut SvgCache, target: usize) {
    let excess = cache.len().saturating_sub(target);
    let victims: Vec<CacheKey> = cache.keys().take(excess).copied().collect();
    for key in &victims {
        cache.remove(key);
    }
    debug!(evicted = victims.len(), remaining = cache.len(), "svg cache evicted");
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = r#"<vector><path android:pathData="M0 0"/></vector>"#;

    #[test]
    fn test_cache_key() {
        assert_eq!(CacheKey::for_source(ICON), CacheKey::for_source(ICON));
        assert_ne!(CacheKey::for_source(ICON), CacheKey::for_source("<vector>"));
        assert_eq!(CacheKey::for_source(ICON).to_string().len(), 16);
    }

    #[test]
    fn test_get_or_convert() {
        let cache = SharedSvgCache::new();
        let first = cache.get_or_convert(ICON).unwrap();
        assert!(first.contains(r#"<path d="M0 0""#));
        assert_eq!(cache.len(), 1);

        let second = cache.get_or_convert(ICON).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failures_are_cached() {
        let cache = SharedSvgCache::new();
        assert_eq!(cache.get_or_convert("<svg/>"), None);

        let entry = cache.get(&CacheKey::for_source("<svg/>")).unwrap();
        assert!(entry.is_failure());
    }

    #[test]
    fn test_shared_cache() {
        let cache = SharedSvgCache::with_config(RenderConfig::MINIFIED);
        let clone = cache.clone();
        clone.get_or_convert(ICON);

        let key = CacheKey::for_source(ICON);
        assert!(cache.contains(&key));
        assert!(!cache.get(&key).unwrap().svg.unwrap().contains('\n'));

        cache.remove(&key);
        assert!(!clone.contains(&key));
        assert!(clone.is_empty());
    }

    #[test]
    fn test_capacity_bounds_len() {
        let cache = SharedSvgCache::with_capacity(RenderConfig::default(), 8);
        for i in 0..100 {
            let source = format!(r#"<vector><path android:pathData="M{i} {i}"/></vector>"#);
            assert!(cache.get_or_convert(&source).is_some());
            assert!(cache.len() <= 8);
        }

        // The most recent document survives eviction
        assert!(cache.contains(&CacheKey::for_source(
            r#"<vector><path android:pathData="M99 99"/></vector>"#
        )));
    }

    #[test]
    fn test_reinsert_at_capacity_does_not_evict() {
        let cache = SharedSvgCache::with_capacity(RenderConfig::default(), 2);
        cache.get_or_convert("<vector>");
        cache.get_or_convert(ICON);
        assert_eq!(cache.len(), 2);

        let key = CacheKey::for_source(ICON);
        cache.insert(key, CacheEntry::new(None));
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key).unwrap().is_failure());
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let cache = SharedSvgCache::with_capacity(RenderConfig::default(), 0);
        assert_eq!(cache.capacity(), 1);
        cache.get_or_convert("<vector>");
        cache.get_or_convert(ICON);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&CacheKey::for_source(ICON)));
    }

    #[test]
    fn test_cache_is_send_sync() {
        static_assertions::assert_impl_all!(SharedSvgCache: Send, Sync);
    }
}
