//! Policy Cache - A bounded in-process key-value cache
//!
//! Provides a capacity-limited store with interchangeable FIFO, LIFO, LRU,
//! MRU and LFU eviction, and a discard notification for every eviction.

pub mod cache;
pub mod config;
pub mod error;
pub mod notify;
pub mod policy;
pub mod repl;

pub use cache::{CacheStore, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use notify::{DiscardEvent, EvictionNotifier};
pub use policy::{EvictionPolicy, EvictionStrategy};
