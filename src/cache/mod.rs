//! Cache Module
//!
//! Bounded in-memory storage, the ordering metadata eviction policies read,
//! and a thread-safe wrapper.

mod entry;
mod list;
mod order;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use list::{OrderList, SlotId};
pub use order::OrderTracker;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::CacheStore;
