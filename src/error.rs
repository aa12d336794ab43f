//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and configuration.
///
/// Runtime operations never fail: invalid `put` input is ignored and a
/// missing key is reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must hold at least one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Policy name did not match any known eviction policy
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Malformed configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unrecognized or malformed command line
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
