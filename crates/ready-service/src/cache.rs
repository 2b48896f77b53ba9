//! In-process query cache.
//!
//! Holds the last active-item listing and every history page read since the
//! last mutation. Mutations invalidate by key; there is no TTL.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use ready_core::entities::Item;
use ready_core::history::{HistoryPage, HistoryQuery};

/// Cache keys a mutation can invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The active item listing (and everything derived from it).
    Items,
    /// All cached history pages.
    Transactions,
}

#[derive(Debug, Default)]
struct CacheState {
    items: Option<Vec<Item>>,
    history: HashMap<HistoryQuery, HistoryPage>,
    invalidations: HashMap<QueryKey, u64>,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    state: Mutex<CacheState>,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn items(&self) -> Option<Vec<Item>> {
        self.lock().items.clone()
    }

    pub fn store_items(&self, items: &[Item]) {
        self.lock().items = Some(items.to_vec());
    }

    #[must_use]
    pub fn history(&self, query: &HistoryQuery) -> Option<HistoryPage> {
        self.lock().history.get(query).cloned()
    }

    pub fn store_history(&self, query: HistoryQuery, page: &HistoryPage) {
        self.lock().history.insert(query, page.clone());
    }

    pub fn invalidate(&self, key: QueryKey) {
        let mut state = self.lock();
        match key {
            QueryKey::Items => state.items = None,
            QueryKey::Transactions => state.history.clear(),
        }
        *state.invalidations.entry(key).or_default() += 1;
        drop(state);
        tracing::debug!(?key, "invalidated query cache");
    }

    /// Invalidate everything a stock or item mutation can change.
    pub fn invalidate_after_mutation(&self) {
        self.invalidate(QueryKey::Items);
        self.invalidate(QueryKey::Transactions);
    }

    /// How many times `key` has been invalidated.
    #[must_use]
    pub fn invalidation_count(&self, key: QueryKey) -> u64 {
        self.lock().invalidations.get(&key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(id: i64) -> Item {
        Item {
            id,
            name: format!("item-{id}"),
            category: None,
            quantity: 1,
            min_quantity: 0,
            is_deleted: false,
            deleted_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_cache_misses() {
        let cache = QueryCache::new();
        assert!(cache.items().is_none());
        assert!(cache.history(&HistoryQuery::default()).is_none());
        assert_eq!(cache.invalidation_count(QueryKey::Items), 0);
    }

    #[test]
    fn history_pages_are_keyed_by_query() {
        let cache = QueryCache::new();
        let first = HistoryQuery::default();
        let second = HistoryQuery::page(2, 10);
        cache.store_history(first, &HistoryPage::empty(&first));

        assert!(cache.history(&first).is_some());
        assert!(cache.history(&second).is_none());
    }

    #[test]
    fn invalidation_clears_only_its_key() {
        let cache = QueryCache::new();
        let query = HistoryQuery::default();
        cache.store_items(&[item(1)]);
        cache.store_history(query, &HistoryPage::empty(&query));

        cache.invalidate(QueryKey::Items);
        assert!(cache.items().is_none());
        assert!(cache.history(&query).is_some());
        assert_eq!(cache.invalidation_count(QueryKey::Items), 1);
        assert_eq!(cache.invalidation_count(QueryKey::Transactions), 0);
    }

    #[test]
    fn mutation_invalidates_both_keys() {
        let cache = QueryCache::new();
        let query = HistoryQuery::default();
        cache.store_items(&[item(1)]);
        cache.store_history(query, &HistoryPage::empty(&query));

        cache.invalidate_after_mutation();
        assert!(cache.items().is_none());
        assert!(cache.history(&query).is_none());
        assert_eq!(cache.invalidation_count(QueryKey::Transactions), 1);
    }
}
