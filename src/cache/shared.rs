//! Shared Cache Module
//!
//! Thread-safe handle around a [`CacheStore`]. Storage and ordering sit
//! behind one mutex, so victim selection always sees a consistent tracker.

use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::{CacheStats, CacheStore};
use crate::policy::{EvictionPolicy, EvictionStrategy};

// == Shared Cache ==
/// Cloneable, thread-safe cache handle. Reads return owned clones.
pub struct SharedCache<K, V, S = EvictionPolicy> {
    inner: Arc<Mutex<CacheStore<K, V, S>>>,
}

impl<K, V, S> Clone for SharedCache<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, S> From<CacheStore<K, V, S>> for SharedCache<K, V, S> {
    fn from(store: CacheStore<K, V, S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }
}

impl<K, V, S> SharedCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: EvictionStrategy,
{
    pub fn new(store: CacheStore<K, V, S>) -> Self {
        Self::from(store)
    }

    /// See [`CacheStore::put`].
    pub fn put(&self, key: Option<K>, value: Option<V>) {
        self.lock().put(key, value);
    }

    /// See [`CacheStore::insert`].
    pub fn insert(&self, key: K, value: V) -> Option<K> {
        self.lock().insert(key, value)
    }

    /// See [`CacheStore::get`]; returns a clone of the value.
    pub fn get(&self, key: Option<&K>) -> Option<V>
    where
        V: Clone,
    {
        self.lock().get(key).cloned()
    }

    /// Retrieves a clone of the value, recording the access.
    pub fn get_value(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.lock().get_value(key).cloned()
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.lock().remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    /// Runs `f` with exclusive access to the store.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut CacheStore<K, V, S>) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, CacheStore<K, V, S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
