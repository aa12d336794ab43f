//! Cache Store Module
//!
//! Bounded key-value store combining HashMap storage with an order tracker
//! and a pluggable eviction strategy.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, OrderTracker};
use crate::config::{Config, DEFAULT_CAPACITY};
use crate::error::{CacheError, Result};
use crate::notify::{DiscardEvent, EvictionNotifier, TracingNotifier};
use crate::policy::{EvictionPolicy, EvictionStrategy};

// == Cache Store ==
/// Capacity-bounded cache with strategy-driven eviction.
///
/// `get` is not read-only: for access-driven policies a hit changes which
/// key is evicted next.
pub struct CacheStore<K, V, S = EvictionPolicy> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Insertion, access and frequency orderings
    order: OrderTracker<K>,
    /// Victim selection
    strategy: S,
    /// Receives a discard event per eviction
    notifier: Box<dyn EvictionNotifier<K>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Logical clock for entry metadata
    clock: u64,
}

impl<K, V, S> CacheStore<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Display,
    S: EvictionStrategy,
{
    // == Constructor ==
    /// Creates a store that logs discards through `tracing`.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, at least 1
    /// * `strategy` - Eviction strategy applied once full
    pub fn new(capacity: usize, strategy: S) -> Result<Self> {
        Self::with_notifier(capacity, strategy, TracingNotifier)
    }

    /// Creates a store holding up to 100 entries.
    pub fn with_default_capacity(strategy: S) -> Self {
        Self::with_default_capacity_and_notifier(strategy, TracingNotifier)
    }
}

impl<K, V> CacheStore<K, V, EvictionPolicy>
where
    K: Eq + Hash + Clone,
{
    /// Creates a store from a validated [`Config`].
    pub fn from_config<N>(config: &Config, notifier: N) -> Result<Self>
    where
        N: EvictionNotifier<K> + 'static,
    {
        Self::with_notifier(config.capacity, config.policy, notifier)
    }
}

impl<K, V, S> CacheStore<K, V, S>
where
    K: Eq + Hash + Clone,
    S: EvictionStrategy,
{
    /// Creates a store that reports discards to `notifier`.
    pub fn with_notifier<N>(capacity: usize, strategy: S, notifier: N) -> Result<Self>
    where
        N: EvictionNotifier<K> + 'static,
    {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        Ok(Self::build(capacity, strategy, Box::new(notifier)))
    }

    /// Creates a store holding up to 100 entries that reports discards to
    /// `notifier`.
    pub fn with_default_capacity_and_notifier<N>(strategy: S, notifier: N) -> Self
    where
        N: EvictionNotifier<K> + 'static,
    {
        Self::build(DEFAULT_CAPACITY, strategy, Box::new(notifier))
    }

    fn build(capacity: usize, strategy: S, notifier: Box<dyn EvictionNotifier<K>>) -> Self {
        Self {
            entries: HashMap::new(),
            order: OrderTracker::new(),
            strategy,
            notifier,
            stats: CacheStats::new(),
            capacity,
            clock: 0,
        }
    }

    // == Put ==
    /// Stores a value, ignoring the call if either argument is missing.
    pub fn put(&mut self, key: Option<K>, value: Option<V>) {
        match (key, value) {
            (Some(key), Some(value)) => {
                self.insert(key, value);
            }
            _ => trace!("put ignored: missing key or value"),
        }
    }

    // == Insert ==
    /// Stores a key-value pair.
    ///
    /// Overwriting an existing key refreshes its access metadata and never
    /// evicts. A new key arriving at a full store first evicts the
    /// strategy's victim, which is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<K> {
        self.clock += 1;

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.replace(value, self.clock);
            self.order.record_access(&key);
            debug!(policy = self.strategy.name(), "overwrote existing entry");
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict()
        } else {
            None
        };

        self.order.record_insert(key.clone());
        self.entries.insert(key, CacheEntry::new(value, self.clock));
        self.stats.set_total_entries(self.entries.len());
        debug!(
            policy = self.strategy.name(),
            len = self.entries.len(),
            "inserted new entry"
        );

        evicted
    }

    // == Get ==
    /// Retrieves a value; a missing key yields None.
    pub fn get(&mut self, key: Option<&K>) -> Option<&V> {
        match key {
            Some(key) => self.get_value(key),
            None => None,
        }
    }

    /// Retrieves a value by key, recording the access on a hit.
    pub fn get_value(&mut self, key: &K) -> Option<&V> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                self.clock += 1;
                entry.touch(self.clock);
                self.order.record_access(key);
                self.stats.record_hit();
                Some(&entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Reads a value without touching ordering metadata or statistics.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns the entry with its metadata, without side effects.
    pub fn entry(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Remove ==
    /// Removes an entry without emitting a discard event.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.entries.remove(key)?;
        self.order.remove(key);
        self.stats.set_total_entries(self.entries.len());
        debug!(policy = self.strategy.name(), "removed entry");
        Some(entry.value)
    }

    // == Clear ==
    /// Drops every entry. Statistics counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Next Victim ==
    /// Key the next evicting insert would discard.
    pub fn next_victim(&self) -> Option<&K> {
        self.strategy.select_victim(&self.order)
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter_inserted()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Read-only view of the ordering metadata.
    pub fn order(&self) -> &OrderTracker<K> {
        &self.order
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Removes the victim from storage and ordering, then reports it.
    fn evict(&mut self) -> Option<K> {
        let victim = self.strategy.select_victim(&self.order)?.clone();
        self.order.remove(&victim);
        self.entries.remove(&victim);
        self.stats.record_eviction();
        self.notifier.notify(&DiscardEvent::new(victim.clone()));
        Some(victim)
    }
}

impl<K, V, S> fmt::Debug for CacheStore<K, V, S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("strategy", &self.strategy)
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
