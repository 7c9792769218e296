//! Kernel value cache
//!
//! LRU cache for kernel matrix entries. The session retrains on the same
//! point set on every animation tick, so K(i,j) values survive across
//! retrains; appending a point only introduces new pairs, while a kernel
//! parameter change or a session reset invalidates everything.
//! Kernel matrices are symmetric, so only K(i,j) with i <= j is stored.

use lru::LruCache;
use std::num::NonZeroUsize;

/// Cache key for kernel values, normalized so that i <= j
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PairKey {
    i: usize,
    j: usize,
}

impl PairKey {
    fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { i, j }
        } else {
            Self { i: j, j: i }
        }
    }
}

/// LRU cache for kernel matrix values
pub struct KernelCache {
    cache: LruCache<PairKey, f64>,
    hits: u64,
    misses: u64,
}

impl KernelCache {
    /// Create a new kernel cache holding up to `capacity` entries
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity clamped to >= 1");
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Get a kernel value from the cache
    pub fn get(&mut self, i: usize, j: usize) -> Option<f64> {
        if let Some(&value) = self.cache.get(&PairKey::new(i, j)) {
            self.hits += 1;
            Some(value)
        } else {
            self.misses += 1;
            None
        }
    }

    /// Put a kernel value into the cache
    pub fn put(&mut self, i: usize, j: usize, value: f64) {
        self.cache.put(PairKey::new(i, j), value);
    }

    /// Fetch K(i,j), computing and storing it on a miss
    pub fn fetch<F: FnOnce() -> f64>(&mut self, i: usize, j: usize, compute: F) -> f64 {
        if let Some(value) = self.get(i, j) {
            value
        } else {
            let value = compute();
            self.put(i, j, value);
            value
        }
    }

    /// Drop every entry; called when the kernel parameters change or the
    /// session resets
    pub fn invalidate(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Cache hit rate over the lifetime of the current entries
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Cache statistics snapshot
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            capacity: self.cache.cap().get(),
            size: self.cache.len(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub capacity: usize,
    pub size: usize,
}
