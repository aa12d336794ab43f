//! FIFO (First In, First Out) eviction.
//!
//! Evicts the oldest inserted key. Reads and overwrites never change the
//! victim.

use std::hash::Hash;

use crate::cache::OrderTracker;
use crate::policy::EvictionStrategy;

/// Evicts the oldest inserted key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fifo;

impl EvictionStrategy for Fifo {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn tracks_access(&self) -> bool {
        false
    }

    fn select_victim<'a, K>(&self, order: &'a OrderTracker<K>) -> Option<&'a K>
    where
        K: Eq + Hash + Clone,
    {
        order.oldest_inserted()
    }
}
