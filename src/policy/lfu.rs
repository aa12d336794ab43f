//! LFU (Least Frequently Used) eviction.
//!
//! Victim is the key with the lowest access count. Ties go to the key that
//! was used least recently among the tied ones, so a key inserted long ago
//! and never read is evicted before one inserted a moment ago.

use std::hash::Hash;

use crate::cache::OrderTracker;
use crate::policy::EvictionStrategy;

/// Evicts the least frequently used key, least recently used on ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lfu;

impl EvictionStrategy for Lfu {
    fn name(&self) -> &'static str {
        "lfu"
    }

    fn tracks_access(&self) -> bool {
        true
    }

    fn select_victim<'a, K>(&self, order: &'a OrderTracker<K>) -> Option<&'a K>
    where
        K: Eq + Hash + Clone,
    {
        order.least_frequently_used()
    }
}
