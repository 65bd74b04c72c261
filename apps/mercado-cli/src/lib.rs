//! # mercado-cli: Command-Line Front End
//!
//! Loads both data files, runs one command, saves what changed.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    mercado startup                                      │
//! │                                                                         │
//! │  1. Initialize tracing ──────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, writing to stderr            │
//! │     • Default: warn,mercado=info, can be overridden with RUST_LOG      │
//! │                                                                         │
//! │  2. Load AppConfig ──────────────────────────────────────────────────► │
//! │     • defaults → config.toml → MERCADO_* env → --data-dir              │
//! │                                                                         │
//! │  3. Ensure data_dir exists                                              │
//! │                                                                         │
//! │  4. Store::load_repository() ─────────────────────────────────────────► │
//! │     • missing or unreadable files load as empty lists                  │
//! │                                                                         │
//! │  5. commands::dispatch() ─────────────────────────────────────────────► │
//! │     • mutate the Repository, save the affected file                    │
//! │     • a file that did not load cleanly is copied to <file>.bak first   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::path::PathBuf;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mercado_store::Store;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult, ErrorCode};

/// Runs one parsed command line and returns the text to print.
pub fn run(cli: Cli) -> CliResult<String> {
    let config = resolve_config(cli.config, cli.data_dir)?;

    std::fs::create_dir_all(&config.data_dir).map_err(|e| {
        CliError::new(
            ErrorCode::StorageError,
            format!(
                "Failed to create data directory {}: {}",
                config.data_dir.display(),
                e
            ),
        )
    })?;

    let store = Store::new(config.store_config());
    info!(
        products = %store.config().products_path.display(),
        customers = %store.config().customers_path.display(),
        "Using data files"
    );

    let mut repo = store.load_repository();
    let mut output = commands::dispatch(cli.command, &mut repo, &store)?;

    for backup in store.backups() {
        output.push_str(&format!(
            "\nThe previous file could not be fully loaded; a copy was kept at {}.",
            backup.display()
        ));
    }

    Ok(output)
}

/// Applies the config file, then the `--data-dir` flag on top.
fn resolve_config(config_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> CliResult<AppConfig> {
    let mut config = match config_path {
        // An explicit --config that cannot be read is an error
        Some(path) => AppConfig::load(Some(&path))?,
        None => AppConfig::load_or_default(None),
    };

    if let Some(dir) = data_dir {
        debug!(dir = %dir.display(), "Overriding data dir from command line");
        config.data_dir = dir;
    }

    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=mercado_store=trace` - Trace the persistence layer
///
/// Logs go to stderr; stdout carries command output only.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,mercado=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
