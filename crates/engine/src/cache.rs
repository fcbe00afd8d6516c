//! Memoization of neighborhood queries.
//!
//! A query is a pure function of the immutable store and its parameters, so
//! results can be reused without invalidation. The cache is bounded; when
//! it fills up it is cleared wholesale rather than tracking recency.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use lineup_core::LineupResult;

use crate::graph::types::Subgraph;
use crate::graph::{GraphStore, NeighborhoodQuery};

type CacheKey = (String, NeighborhoodQuery);

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran the query.
    pub misses: u64,
    /// Entries currently held.
    pub entries: usize,
}

/// Bounded cache of query results for one store.
#[derive(Debug)]
pub struct QueryCache {
    capacity: usize,
    entries: Mutex<FxHashMap<CacheKey, Arc<Subgraph>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryCache {
    /// Cache holding at most `capacity` results. `0` disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(FxHashMap::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached result for `(root, query)`, computing it on miss.
    ///
    /// Errors are returned as-is and never cached.
    pub fn get_or_run(
        &self,
        store: &GraphStore,
        root: &str,
        query: &NeighborhoodQuery,
    ) -> LineupResult<Arc<Subgraph>> {
        let key = (root.to_string(), *query);
        if let Some(hit) = self.entries.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(hit));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = Arc::new(query.run(store, root)?);

        if self.capacity > 0 {
            let mut entries = self.entries.lock();
            if entries.len() >= self.capacity {
                tracing::debug!(target: "lineup::cache", evicted = entries.len(), "Query cache full, clearing");
                entries.clear();
            }
            entries.insert(key, Arc::clone(&result));
        }
        Ok(result)
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.lock().len(),
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::build;
    use crate::graph::RootRetention;
    use lineup_core::ConnectionRecord;

    fn store() -> GraphStore {
        build(
            &[],
            &[
                ConnectionRecord::new("A", "B", None),
                ConnectionRecord::new("B", "C", None),
            ],
        )
        .unwrap()
    }

    #[test]
    fn second_lookup_is_a_hit() {
        let gs = store();
        let cache = QueryCache::new(8);
        let q = NeighborhoodQuery::new(1);
        let first = cache.get_or_run(&gs, "A", &q).unwrap();
        let second = cache.get_or_run(&gs, "A", &q).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn parameters_are_part_of_the_key() {
        let gs = store();
        let cache = QueryCache::new(8);
        cache.get_or_run(&gs, "A", &NeighborhoodQuery::new(1)).unwrap();
        cache.get_or_run(&gs, "A", &NeighborhoodQuery::new(2)).unwrap();
        cache
            .get_or_run(&gs, "A", &NeighborhoodQuery::new(1).originals_only(true))
            .unwrap();
        cache
            .get_or_run(
                &gs,
                "A",
                &NeighborhoodQuery::new(1)
                    .originals_only(true)
                    .root_retention(RootRetention::Filtered),
            )
            .unwrap();
        assert_eq!(cache.stats().misses, 4);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn errors_are_not_cached() {
        let gs = store();
        let cache = QueryCache::new(8);
        let q = NeighborhoodQuery::new(1);
        assert!(cache.get_or_run(&gs, "Z", &q).is_err());
        assert!(cache.get_or_run(&gs, "Z", &q).is_err());
        assert_eq!(cache.stats().entries, 0);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn full_cache_is_cleared() {
        let gs = store();
        let cache = QueryCache::new(2);
        let q = NeighborhoodQuery::new(1);
        cache.get_or_run(&gs, "A", &q).unwrap();
        cache.get_or_run(&gs, "B", &q).unwrap();
        cache.get_or_run(&gs, "C", &q).unwrap();
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn zero_capacity_disables_storage() {
        let gs = store();
        let cache = QueryCache::new(0);
        let q = NeighborhoodQuery::new(1);
        cache.get_or_run(&gs, "A", &q).unwrap();
        cache.get_or_run(&gs, "A", &q).unwrap();
        assert_eq!(cache.stats().hits, 0);
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn cached_result_matches_direct_query() {
        let gs = store();
        let cache = QueryCache::default();
        let q = NeighborhoodQuery::new(2);
        let cached = cache.get_or_run(&gs, "A", &q).unwrap();
        assert_eq!(*cached, q.run(&gs, "A").unwrap());
    }
}
