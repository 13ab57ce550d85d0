//! Query result caching.
//!
//! Conjunctive queries are read-only and repeat often in interactive use, so
//! the engine is wrapped rather than modified: [`CachedEngine`] layers a
//! small LRU map over any [`SearchEngine`] and stays out of the index's way.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;

use crate::engine::SearchEngine;
use crate::error::EngineError;
use crate::index::DocId;

/// Query results kept when no capacity is configured.
pub const DEFAULT_CACHE_CAPACITY: usize = 2;

/// Point-in-time counters for a result cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }
}

/// LRU result cache layered over an engine.
///
/// Keys are raw query strings, before any tokenization: `"cat sat"` and
/// `"sat cat!"` resolve to the same documents but occupy separate entries.
/// Results are stored and returned by value, so a caller mutating what it
/// got back can never corrupt a cached entry. Lookups refresh recency;
/// inserting into a full cache evicts the least recently used query.
///
/// Caching is transparent: for any query sequence the wrapped engine
/// returns exactly what the bare engine would, and only the hit/miss
/// counters tell the difference.
pub struct CachedEngine<E> {
    inner: E,
    cache: Mutex<LruCache<String, Vec<DocId>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<E> CachedEngine<E> {
    pub fn new(inner: E, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn with_default_capacity(inner: E) -> Self {
        Self::new(inner, NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap())
    }

    pub fn stats(&self) -> CacheStats {
        let (entries, capacity) = self
            .cache
            .lock()
            .map(|cache| (cache.len(), cache.cap().get()))
            .unwrap_or((0, 0));
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
            capacity,
        }
    }
}

impl<E: SearchEngine> SearchEngine for CachedEngine<E> {
    fn add_document(&mut self, name: &str, text: &str) -> Result<DocId, EngineError> {
        let id = self.inner.add_document(name, text)?;
        // Results computed before this insert no longer reflect the corpus.
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
        Ok(id)
    }

    fn search(&self, query: &str) -> Vec<DocId> {
        if let Ok(mut cache) = self.cache.lock()
            && let Some(cached) = cache.get(query)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return cached.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let matches = self.inner.search(query);
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(query.to_string(), matches.clone());
        }
        matches
    }

    fn doc_name(&self, id: DocId) -> Option<&str> {
        self.inner.doc_name(id)
    }

    fn doc_count(&self) -> usize {
        self.inner.doc_count()
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        Some(self.stats())
    }
}
