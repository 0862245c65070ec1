//! Compiled-pattern cache keyed by specification string
//!
//! Compilation happens under the cache lock, so concurrent callers asking for
//! the same specification compile it once. Failures are cached too.

use crate::compile::CompiledPattern;
use crate::error::PatternError;
use crate::Result;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

/// Default number of specifications kept
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    /// Each miss is one compilation
    pub misses: u64,
}

struct Inner {
    entries: LruCache<String, std::result::Result<Arc<CompiledPattern>, PatternError>>,
    stats: CacheStats,
}

/// Thread-safe memoization of [`CompiledPattern::compile`]
pub struct PatternCache {
    inner: Mutex<Inner>,
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl PatternCache {
    /// Create a cache holding up to `capacity` specifications
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of specifications (0 for unbounded)
    pub fn new(capacity: usize) -> Self {
        let entries = match NonZeroUsize::new(capacity) {
            Some(capacity) => LruCache::new(capacity),
            None => LruCache::unbounded(),
        };

        Self {
            inner: Mutex::new(Inner {
                entries,
                stats: CacheStats::default(),
            }),
        }
    }

    /// Compiled pattern for `spec`, compiling it on first use
    pub fn get_or_compile(&self, spec: &str) -> Result<Arc<CompiledPattern>> {
        // A panic while compiling leaves no half-written entry behind.
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = inner.entries.get(spec).cloned() {
            inner.stats.hits += 1;
            return cached;
        }

        tracing::debug!("Pattern cache miss for '{}'", spec);
        inner.stats.misses += 1;
        let compiled = CompiledPattern::compile(spec).map(Arc::new);
        inner.entries.put(spec.to_string(), compiled.clone());
        compiled
    }

    pub fn stats(&self) -> CacheStats {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stats
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry; counters are kept
    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clear();
    }
}
