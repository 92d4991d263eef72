//! Derived-asset caching.
//!
//! Renderers memoize expensive per-schema assets (decoded images, shaped
//! glyph runs, embedded font programs) across render calls. The cache key is
//! derived from the schema-type discriminator plus a caller-chosen auxiliary
//! input; the storage is a byte cache with LRU eviction shared by concurrent
//! sub-renders.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Derive the cache key for a schema-derived asset.
///
/// The key is the schema-type discriminator concatenated with the auxiliary
/// input, with no separator. Deterministic and total; uniqueness beyond plain
/// concatenation is the caller's responsibility - choose auxiliary inputs
/// that disambiguate when types could collide.
#[must_use]
pub fn derive_cache_key(type_name: &str, input: &str) -> String {
    format!("{type_name}{input}")
}

/// Entry in the asset cache.
#[derive(Debug)]
struct CacheEntry {
    /// The cached bytes.
    data: Vec<u8>,
    /// Logical access clock value at last touch.
    last_accessed: u64,
}

/// Configuration for the asset cache.
#[derive(Debug, Clone)]
pub struct AssetCacheConfig {
    /// Maximum total size in bytes.
    pub max_bytes: usize,
    /// Maximum number of entries.
    pub max_entries: usize,
}

impl Default for AssetCacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: 64 * 1024 * 1024,
            max_entries: 512,
        }
    }
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Number of evictions.
    pub evictions: u64,
}

/// Byte cache for derived render assets, with LRU eviction.
#[derive(Debug)]
pub struct AssetCache {
    entries: HashMap<String, CacheEntry>,
    config: AssetCacheConfig,
    current_bytes: usize,
    clock: u64,
    stats: CacheStats,
}

impl AssetCache {
    /// Create a cache with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AssetCacheConfig::default())
    }

    /// Create a cache with custom configuration.
    #[must_use]
    pub fn with_config(config: AssetCacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            current_bytes: 0,
            clock: 0,
            stats: CacheStats::default(),
        }
    }

    /// Look up cached bytes, marking the entry as recently used.
    pub fn get(&mut self, key: &str) -> Option<&[u8]> {
        self.clock += 1;
        let clock = self.clock;
        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_accessed = clock;
            self.stats.hits += 1;
            Some(&entry.data)
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Insert bytes, evicting least-recently-used entries as needed.
    pub fn insert(&mut self, key: String, data: Vec<u8>) {
        let size = data.len();

        if let Some(old) = self.entries.remove(&key) {
            self.current_bytes -= old.data.len();
        }

        self.evict_for(size);

        self.clock += 1;
        self.current_bytes += size;
        self.entries.insert(
            key,
            CacheEntry {
                data,
                last_accessed: self.clock,
            },
        );
    }

    /// Whether a key is cached.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove an entry, returning its bytes.
    pub fn remove(&mut self, key: &str) -> Option<Vec<u8>> {
        let entry = self.entries.remove(key)?;
        self.current_bytes -= entry.data.len();
        Some(entry.data)
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_bytes = 0;
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current total size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.current_bytes
    }

    /// Cache statistics.
    #[must_use]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Evict until the cache can take `incoming` more bytes within limits.
    fn evict_for(&mut self, incoming: usize) {
        while !self.entries.is_empty()
            && (self.current_bytes + incoming > self.config.max_bytes
                || self.entries.len() >= self.config.max_entries)
        {
            self.evict_lru();
        }
    }

    /// Evict the least-recently-used entry.
    fn evict_lru(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_accessed)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            if let Some(entry) = self.entries.remove(&key) {
                self.current_bytes -= entry.data.len();
                self.stats.evictions += 1;
                tracing::debug!("Asset cache evicted '{key}' ({} bytes)", entry.data.len());
            }
        }
    }
}

impl Default for AssetCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to an [`AssetCache`], usable from concurrently issued
/// sub-renders within one render call.
#[derive(Debug, Clone, Default)]
pub struct SharedAssetCache {
    inner: Arc<RwLock<AssetCache>>,
}

impl SharedAssetCache {
    /// Create a shared cache with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared cache with custom configuration.
    #[must_use]
    pub fn with_config(config: AssetCacheConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AssetCache::with_config(config))),
        }
    }

    /// Look up cached bytes by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut cache = self.inner.write().ok()?;
        cache.get(key).map(<[u8]>::to_vec)
    }

    /// Insert bytes under a key.
    pub fn insert(&self, key: String, data: Vec<u8>) {
        if let Ok(mut cache) = self.inner.write() {
            cache.insert(key, data);
        }
    }

    /// Whether a key is cached.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|cache| cache.contains(key))
            .unwrap_or(false)
    }

    /// Snapshot of the cache statistics.
    #[must_use]
    pub fn stats(&self) -> Option<CacheStats> {
        self.inner.read().ok().map(|cache| cache.stats().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_cache_key_concatenates() {
        assert_eq!(derive_cache_key("text", "abc"), "textabc");
        assert_eq!(derive_cache_key("cell", ""), "cell");
    }

    #[test]
    fn test_derive_cache_key_distinct_types() {
        assert_ne!(derive_cache_key("text", "x"), derive_cache_key("cell", "x"));
    }

    #[test]
    fn test_cache_insert_and_get() {
        let mut cache = AssetCache::new();
        cache.insert("a".to_string(), vec![1, 2, 3]);

        assert!(cache.contains("a"));
        assert_eq!(cache.get("a"), Some([1, 2, 3].as_slice()));
        assert_eq!(cache.size_bytes(), 3);
    }

    #[test]
    fn test_cache_miss_counts() {
        let mut cache = AssetCache::new();
        assert!(cache.get("missing").is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_eviction_by_entry_count() {
        let mut cache = AssetCache::with_config(AssetCacheConfig {
            max_bytes: 1024,
            max_entries: 2,
        });

        cache.insert("a".to_string(), vec![1]);
        cache.insert("b".to_string(), vec![2]);
        let _ = cache.get("a");
        cache.insert("c".to_string(), vec![3]);

        // "b" was least recently used.
        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_eviction_by_size() {
        let mut cache = AssetCache::with_config(AssetCacheConfig {
            max_bytes: 10,
            max_entries: 16,
        });

        cache.insert("a".to_string(), vec![0; 6]);
        cache.insert("b".to_string(), vec![0; 6]);

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.size_bytes() <= 10);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cache = AssetCache::new();
        cache.insert("a".to_string(), vec![1, 2]);
        cache.insert("b".to_string(), vec![3]);

        assert_eq!(cache.remove("a"), Some(vec![1, 2]));
        assert_eq!(cache.size_bytes(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.size_bytes(), 0);
    }

    #[test]
    fn test_shared_cache_round_trip() {
        let cache = SharedAssetCache::new();
        let key = derive_cache_key("text", "Roboto");

        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), vec![9, 9]);

        assert!(cache.contains(&key));
        assert_eq!(cache.get(&key), Some(vec![9, 9]));

        let stats = cache.stats().expect("should read stats");
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }
}
