//! Eviction Policy Module
//!
//! Pure victim-selection logic. Every policy reads the same
//! [`OrderTracker`]; none of them mutate it.
//!
//! | Policy | Victim |
//! |--------|--------|
//! | FIFO   | oldest inserted key |
//! | LIFO   | newest inserted key |
//! | LRU    | least recently accessed key |
//! | MRU    | most recently accessed key |
//! | LFU    | lowest access count, least recently accessed on ties |

mod fifo;
mod lfu;
mod lifo;
mod lru;
mod mru;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::OrderTracker;
use crate::error::CacheError;

pub use fifo::Fifo;
pub use lfu::Lfu;
pub use lifo::Lifo;
pub use lru::Lru;
pub use mru::Mru;

// == Eviction Strategy ==
/// Chooses which key a full cache gives up for a new one.
pub trait EvictionStrategy {
    /// Short lowercase policy name.
    fn name(&self) -> &'static str;

    /// True when `get` calls can change the victim.
    fn tracks_access(&self) -> bool;

    /// Returns the key to evict, or None if nothing is tracked.
    fn select_victim<'a, K>(&self, order: &'a OrderTracker<K>) -> Option<&'a K>
    where
        K: Eq + Hash + Clone;
}

// == Eviction Policy ==
/// Runtime-selectable policy, dispatching to the unit strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    Fifo,
    Lifo,
    Lru,
    Mru,
    Lfu,
}

impl EvictionPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [EvictionPolicy; 5] = [
        EvictionPolicy::Fifo,
        EvictionPolicy::Lifo,
        EvictionPolicy::Lru,
        EvictionPolicy::Mru,
        EvictionPolicy::Lfu,
    ];
}

impl EvictionStrategy for EvictionPolicy {
    fn name(&self) -> &'static str {
        match self {
            Self::Fifo => Fifo.name(),
            Self::Lifo => Lifo.name(),
            Self::Lru => Lru.name(),
            Self::Mru => Mru.name(),
            Self::Lfu => Lfu.name(),
        }
    }

    fn tracks_access(&self) -> bool {
        match self {
            Self::Fifo => Fifo.tracks_access(),
            Self::Lifo => Lifo.tracks_access(),
            Self::Lru => Lru.tracks_access(),
            Self::Mru => Mru.tracks_access(),
            Self::Lfu => Lfu.tracks_access(),
        }
    }

    fn select_victim<'a, K>(&self, order: &'a OrderTracker<K>) -> Option<&'a K>
    where
        K: Eq + Hash + Clone,
    {
        match self {
            Self::Fifo => Fifo.select_victim(order),
            Self::Lifo => Lifo.select_victim(order),
            Self::Lru => Lru.select_victim(order),
            Self::Mru => Mru.select_victim(order),
            Self::Lfu => Lfu.select_victim(order),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lifo" => Ok(Self::Lifo),
            "lru" => Ok(Self::Lru),
            "mru" => Ok(Self::Mru),
            "lfu" => Ok(Self::Lfu),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}
