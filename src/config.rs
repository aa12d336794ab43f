//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

use crate::error::{CacheError, Result};
use crate::policy::EvictionPolicy;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// Environment variable holding the cache capacity.
pub const CAPACITY_VAR: &str = "CACHE_CAPACITY";

/// Environment variable holding the eviction policy name.
pub const POLICY_VAR: &str = "CACHE_POLICY";

/// Cache configuration parameters.
///
/// Fixed once a cache is built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Eviction policy applied when the cache is full
    pub policy: EvictionPolicy,
}

impl Config {
    /// Creates a config with an explicit capacity and policy.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        Self { capacity, policy }
    }

    /// Creates a new Config by loading values from environment variables.
    ///
    /// Unset variables take their defaults; malformed ones are reported, and
    /// the result is validated.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 100)
    /// - `CACHE_POLICY` - One of fifo, lifo, lru, mru, lfu (default: lru)
    pub fn try_from_env() -> Result<Self> {
        Self::try_from_lookup(|name| env::var(name).ok())
    }

    /// Strict load from an arbitrary variable source.
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let capacity = match lookup(CAPACITY_VAR) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                CacheError::InvalidConfig(format!(
                    "{} is not a valid capacity: {:?}",
                    CAPACITY_VAR, raw
                ))
            })?,
            None => defaults.capacity,
        };

        let policy = match lookup(POLICY_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.policy,
        };

        let config = Self { capacity, policy };
        config.validate()?;
        Ok(config)
    }

    /// Rejects a capacity of zero.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: EvictionPolicy::Lru,
        }
    }
}
