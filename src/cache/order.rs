//! Order Tracker Module
//!
//! Keeps the ordering metadata every eviction policy reads: insertion order,
//! access order and per-key access frequency. Every policy sees the same
//! tracker state; policies only differ in which end of which order they read.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::cache::list::{OrderList, SlotId};

// Handles into each ordering for one tracked key.
#[derive(Debug, Clone, Copy)]
struct Position {
    inserted: SlotId,
    accessed: SlotId,
    frequency: u64,
    bucket_slot: SlotId,
}

// == Order Tracker ==
/// Tracks insertion order, access order and access frequency.
///
/// Each frequency bucket is ordered by the time keys entered it, so the front
/// of the lowest bucket is the least recently used among the least
/// frequently used keys.
#[derive(Debug)]
pub struct OrderTracker<K> {
    positions: HashMap<K, Position>,
    insertion: OrderList<K>,
    access: OrderList<K>,
    buckets: BTreeMap<u64, OrderList<K>>,
}

impl<K> Default for OrderTracker<K> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
            insertion: OrderList::new(),
            access: OrderList::new(),
            buckets: BTreeMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> OrderTracker<K> {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Insert ==
    /// Starts tracking a new key with frequency 1.
    ///
    /// A key that is already tracked is treated as an access instead.
    pub fn record_insert(&mut self, key: K) {
        if self.positions.contains_key(&key) {
            self.record_access(&key);
            return;
        }

        let inserted = self.insertion.push_back(key.clone());
        let accessed = self.access.push_back(key.clone());
        let bucket_slot = self.buckets.entry(1).or_default().push_back(key.clone());

        self.positions.insert(
            key,
            Position {
                inserted,
                accessed,
                frequency: 1,
                bucket_slot,
            },
        );
    }

    // == Record Access ==
    /// Marks a key as just used: newest in access order and one step up in
    /// frequency. Insertion order is left alone.
    ///
    /// Returns false if the key is not tracked.
    pub fn record_access(&mut self, key: &K) -> bool {
        let Some(position) = self.positions.get_mut(key) else {
            return false;
        };

        self.access.move_to_back(position.accessed);

        let old = position.frequency;
        let new = old.saturating_add(1);
        let moved = Self::take_from_bucket(&mut self.buckets, old, position.bucket_slot);
        if let Some(moved) = moved {
            position.bucket_slot = self.buckets.entry(new).or_default().push_back(moved);
            position.frequency = new;
        }
        true
    }

    // == Remove ==
    /// Stops tracking a key in every ordering.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(position) = self.positions.remove(key) else {
            return false;
        };

        self.insertion.remove(position.inserted);
        self.access.remove(position.accessed);
        Self::take_from_bucket(&mut self.buckets, position.frequency, position.bucket_slot);
        true
    }

    // == Policy Views ==
    /// Oldest inserted key still tracked.
    pub fn oldest_inserted(&self) -> Option<&K> {
        self.insertion.front()
    }

    /// Most recently inserted key still tracked.
    pub fn newest_inserted(&self) -> Option<&K> {
        self.insertion.back()
    }

    /// Key with the oldest access.
    pub fn least_recently_used(&self) -> Option<&K> {
        self.access.front()
    }

    /// Key with the most recent access.
    pub fn most_recently_used(&self) -> Option<&K> {
        self.access.back()
    }

    /// Lowest-frequency key; ties go to the one that reached that frequency
    /// first, i.e. the least recently used among them.
    pub fn least_frequently_used(&self) -> Option<&K> {
        self.buckets
            .values()
            .find(|bucket| !bucket.is_empty())
            .and_then(OrderList::front)
    }

    /// Access count of a tracked key (1 on insert).
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.positions.get(key).map(|p| p.frequency)
    }

    /// Iterates tracked keys in insertion order.
    pub fn iter_inserted(&self) -> impl Iterator<Item = &K> {
        self.insertion.iter()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.insertion.clear();
        self.access.clear();
        self.buckets.clear();
    }

    // Removes a node from its bucket, dropping the bucket once empty.
    fn take_from_bucket(
        buckets: &mut BTreeMap<u64, OrderList<K>>,
        frequency: u64,
        slot: SlotId,
    ) -> Option<K> {
        let bucket = buckets.get_mut(&frequency)?;
        let key = bucket.remove(slot);
        if bucket.is_empty() {
            buckets.remove(&frequency);
        }
        key
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(keys: &[&'static str]) -> OrderTracker<&'static str> {
        let mut tracker = OrderTracker::new();
        for key in keys {
            tracker.record_insert(*key);
        }
        tracker
    }

    #[test]
    fn test_tracker_new() {
        let tracker: OrderTracker<String> = OrderTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.oldest_inserted(), None);
        assert_eq!(tracker.least_frequently_used(), None);
    }

    #[test]
    fn test_tracker_insertion_views() {
        let tracker = tracker_with(&["a", "b", "c"]);

        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.oldest_inserted(), Some(&"a"));
        assert_eq!(tracker.newest_inserted(), Some(&"c"));
        assert_eq!(tracker.least_recently_used(), Some(&"a"));
        assert_eq!(tracker.most_recently_used(), Some(&"c"));
    }

    #[test]
    fn test_tracker_access_leaves_insertion_order() {
        let mut tracker = tracker_with(&["a", "b", "c"]);

        assert!(tracker.record_access(&"a"));

        assert_eq!(tracker.oldest_inserted(), Some(&"a"));
        assert_eq!(tracker.newest_inserted(), Some(&"c"));
        assert_eq!(tracker.least_recently_used(), Some(&"b"));
        assert_eq!(tracker.most_recently_used(), Some(&"a"));
    }

    #[test]
    fn test_tracker_access_unknown_key() {
        let mut tracker = tracker_with(&["a"]);
        assert!(!tracker.record_access(&"zzz"));
        assert_eq!(tracker.frequency(&"a"), Some(1));
    }

    #[test]
    fn test_tracker_frequency_counts() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.record_access(&"a");
        tracker.record_access(&"a");

        assert_eq!(tracker.frequency(&"a"), Some(3));
        assert_eq!(tracker.frequency(&"b"), Some(1));
        assert_eq!(tracker.least_frequently_used(), Some(&"b"));
    }

    #[test]
    fn test_tracker_lfu_tie_breaks_by_recency() {
        let mut tracker = tracker_with(&["a", "b", "c"]);

        // All at frequency 2; "b" reached it first
        tracker.record_access(&"b");
        tracker.record_access(&"c");
        tracker.record_access(&"a");

        assert_eq!(tracker.least_frequently_used(), Some(&"b"));
    }

    #[test]
    fn test_tracker_reinsert_counts_as_access() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.record_insert("a");

        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.frequency(&"a"), Some(2));
        assert_eq!(tracker.oldest_inserted(), Some(&"a"));
        assert_eq!(tracker.most_recently_used(), Some(&"a"));
    }

    #[test]
    fn test_tracker_remove_from_every_order() {
        let mut tracker = tracker_with(&["a", "b", "c"]);
        tracker.record_access(&"b");

        assert!(tracker.remove(&"b"));
        assert!(!tracker.remove(&"b"));

        assert!(!tracker.contains(&"b"));
        assert_eq!(tracker.iter_inserted().copied().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(tracker.least_recently_used(), Some(&"a"));
        assert_eq!(tracker.most_recently_used(), Some(&"c"));
        assert_eq!(tracker.frequency(&"b"), None);
        assert_eq!(tracker.least_frequently_used(), Some(&"a"));
    }

    #[test]
    fn test_tracker_empty_bucket_is_dropped() {
        let mut tracker = tracker_with(&["a"]);
        tracker.record_access(&"a");
        tracker.record_insert("b");

        // "b" is alone at frequency 1 after "a" moved up
        assert_eq!(tracker.least_frequently_used(), Some(&"b"));
        tracker.remove(&"b");
        assert_eq!(tracker.least_frequently_used(), Some(&"a"));
    }

    #[test]
    fn test_tracker_clear() {
        let mut tracker = tracker_with(&["a", "b"]);
        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.most_recently_used(), None);
        assert_eq!(tracker.least_frequently_used(), None);
    }
}
