//! LIFO (Last In, First Out) eviction.
//!
//! Stack-like: the most recently inserted key is evicted first, so a full
//! cache keeps its oldest entries and churns the newest slot.

use std::hash::Hash;

use crate::cache::OrderTracker;
use crate::policy::EvictionStrategy;

/// Evicts the most recently inserted key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifo;

impl EvictionStrategy for Lifo {
    fn name(&self) -> &'static str {
        "lifo"
    }

    fn tracks_access(&self) -> bool {
        false
    }

    fn select_victim<'a, K>(&self, order: &'a OrderTracker<K>) -> Option<&'a K>
    where
        K: Eq + Hash + Clone,
    {
        order.newest_inserted()
    }
}
