//! Command Module
//!
//! Parses line commands for the interactive binary and runs them against a
//! [`CacheStore`].
//!
//! # Commands
//! - `put <key> <value>` - Store a value (missing value is ignored)
//! - `get <key>` - Retrieve a value
//! - `del <key>` - Remove a key
//! - `keys` - List keys in insertion order
//! - `victim` - Show the key the next eviction would discard
//! - `stats` - Print statistics as JSON
//! - `quit` - Exit

use std::str::FromStr;

use serde::Serialize;

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::policy::EvictionStrategy;

/// Placeholder printed for a missing key or an empty listing.
pub const NIL: &str = "(nil)";

// == Command ==
/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { key: String, value: Option<String> },
    Get { key: String },
    Del { key: String },
    Keys,
    Victim,
    Stats,
    Quit,
}

impl FromStr for Command {
    type Err = CacheError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let name = parts
            .next()
            .ok_or_else(|| CacheError::InvalidCommand("empty line".to_string()))?;

        let mut key = || {
            parts
                .next()
                .map(str::to_string)
                .ok_or_else(|| CacheError::InvalidCommand(format!("{} requires a key", name)))
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "put" | "set" => {
                let key = key()?;
                let rest: Vec<&str> = parts.collect();
                let value = if rest.is_empty() {
                    None
                } else {
                    Some(rest.join(" "))
                };
                Command::Put { key, value }
            }
            "get" => Command::Get { key: key()? },
            "del" | "delete" => Command::Del { key: key()? },
            "keys" => Command::Keys,
            "victim" => Command::Victim,
            "stats" => Command::Stats,
            "quit" | "exit" => Command::Quit,
            other => return Err(CacheError::InvalidCommand(format!("unknown command '{}'", other))),
        };
        Ok(command)
    }
}

/// Stats line payload.
#[derive(Debug, Serialize)]
struct StatsReply<'a> {
    policy: &'a str,
    access_driven: bool,
    capacity: usize,
    hits: u64,
    misses: u64,
    evictions: u64,
    total_entries: usize,
    hit_rate: f64,
}

// == Execute ==
/// Runs a command and returns the reply line, or None for `quit`.
pub fn execute<S: EvictionStrategy>(
    store: &mut CacheStore<String, String, S>,
    command: Command,
) -> Option<String> {
    let reply = match command {
        Command::Put { key, value } => {
            store.put(Some(key), value);
            "OK".to_string()
        }
        Command::Get { key } => store
            .get_value(&key)
            .cloned()
            .unwrap_or_else(|| NIL.to_string()),
        Command::Del { key } => match store.remove(&key) {
            Some(_) => "OK".to_string(),
            None => NIL.to_string(),
        },
        Command::Keys => {
            let keys: Vec<&str> = store.keys().map(String::as_str).collect();
            if keys.is_empty() {
                NIL.to_string()
            } else {
                keys.join(" ")
            }
        }
        Command::Victim => store
            .next_victim()
            .cloned()
            .unwrap_or_else(|| NIL.to_string()),
        Command::Stats => {
            let stats = store.stats();
            let reply = StatsReply {
                policy: store.strategy().name(),
                access_driven: store.strategy().tracks_access(),
                capacity: store.capacity(),
                hits: stats.hits,
                misses: stats.misses,
                evictions: stats.evictions,
                total_entries: stats.total_entries,
                hit_rate: stats.hit_rate(),
            };
            serde_json::to_string(&reply).unwrap_or_else(|e| format!("error: {}", e))
        }
        Command::Quit => return None,
    };
    Some(reply)
}
