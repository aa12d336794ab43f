//! MRU (Most Recently Used) eviction.
//!
//! Useful for cyclic scans where the key just read is the one least likely
//! to be needed again soon.

use std::hash::Hash;

use crate::cache::OrderTracker;
use crate::policy::EvictionStrategy;

/// Evicts the key that was accessed most recently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mru;

impl EvictionStrategy for Mru {
    fn name(&self) -> &'static str {
        "mru"
    }

    fn tracks_access(&self) -> bool {
        true
    }

    fn select_victim<'a, K>(&self, order: &'a OrderTracker<K>) -> Option<&'a K>
    where
        K: Eq + Hash + Clone,
    {
        order.most_recently_used()
    }
}
