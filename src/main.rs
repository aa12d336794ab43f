//! Policy Cache - interactive shell
//!
//! Reads line commands from stdin and runs them against one cache. Evictions
//! are printed as `DISCARD: <key>` lines before the command's reply.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use policy_cache::cache::CacheStore;
use policy_cache::notify::WriterNotifier;
use policy_cache::repl::{execute, Command};
use policy_cache::Config;

/// Main entry point for the cache shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so stdout stays clean)
/// 2. Load configuration from environment variables
/// 3. Create the cache store
/// 4. Process commands until `quit` or end of input
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::try_from_env().context("failed to load cache configuration")?;
    info!(
        "Configuration loaded: capacity={}, policy={}",
        config.capacity, config.policy
    );

    let mut store: CacheStore<String, String> =
        CacheStore::from_config(&config, WriterNotifier::stdout())?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                writeln!(stdout, "ERR {}", e)?;
                continue;
            }
        };

        match execute(&mut store, command) {
            Some(reply) => writeln!(stdout, "{}", reply)?,
            None => break,
        }
    }

    info!("Shutting down with {} entries", store.len());
    Ok(())
}
