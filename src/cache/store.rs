//! Cache Store Module
//!
//! Server-side wrapper around [`LruCache`] that adds hit/miss/eviction statistics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheStats, LruCache};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// String cache with a byte budget, LRU eviction and statistics.
///
/// Not synchronized; the HTTP layer keeps it behind a mutex.
#[derive(Debug)]
pub struct CacheStore {
    /// Byte-budgeted LRU storage
    lru: LruCache<String>,
    /// Hit and miss counters
    stats: CacheStats,
    /// Bumped by the eviction hook
    evictions: Arc<AtomicU64>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity_bytes` of keys and values.
    ///
    /// # Arguments
    /// * `capacity_bytes` - Byte budget, 0 for an unbounded cache
    pub fn new(capacity_bytes: usize) -> Self {
        let evictions = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&evictions);

        let lru = LruCache::with_eviction_hook(capacity_bytes, move |key: &str, value: &String| {
            counter.fetch_add(1, Ordering::Relaxed);
            debug!("Evicted key '{}' ({} bytes)", key, key.len() + value.len());
        });

        Self {
            lru,
            stats: CacheStats::new(),
            evictions,
        }
    }

    // == Set ==
    /// Stores a key-value pair, evicting least recently used entries if the
    /// byte budget is exceeded.
    ///
    /// If the key already exists, the value is overwritten. Returns false when
    /// the entry alone exceeds the budget and was evicted straight away.
    pub fn set(&mut self, key: String, value: String) -> bool {
        self.lru.insert(key.clone(), value);
        self.lru.contains_key(&key)
    }

    // == Get ==
    /// Retrieves a value by key and marks it as recently used.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Result<String> {
        match self.lru.get(key) {
            Some(value) => {
                let value = value.clone();
                self.stats.record_hit();
                Ok(value)
            }
            None => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            evictions: self.evictions.load(Ordering::Relaxed),
            total_entries: self.lru.len(),
            used_bytes: self.lru.used_bytes(),
            capacity_bytes: self.lru.capacity_bytes(),
            ..self.stats.clone()
        }
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.lru.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }

    /// Returns the bytes currently used by keys and values.
    pub fn used_bytes(&self) -> usize {
        self.lru.used_bytes()
    }
}
