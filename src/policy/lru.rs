//! LRU (Least Recently Used) eviction.

use std::hash::Hash;

use crate::cache::OrderTracker;
use crate::policy::EvictionStrategy;

/// Evicts the key whose last get or overwrite is oldest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lru;

impl EvictionStrategy for Lru {
    fn name(&self) -> &'static str {
        "lru"
    }

    fn tracks_access(&self) -> bool {
        true
    }

    fn select_victim<'a, K>(&self, order: &'a OrderTracker<K>) -> Option<&'a K>
    where
        K: Eq + Hash + Clone,
    {
        order.least_recently_used()
    }
}
