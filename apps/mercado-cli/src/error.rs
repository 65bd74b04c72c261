//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in mercado                                │
//! │                                                                         │
//! │  Command handler → CliResult<String>                                    │
//! │         │                                                               │
//! │         ├── CoreError::IndexOutOfRange ──► NothingSelected / NotFound   │
//! │         ├── CoreError::Validation ───────► Validation                   │
//! │         ├── StoreError ──────────────────► Storage                      │
//! │         └── ConfigError ─────────────────► Config                       │
//! │                                                                         │
//! │  main.rs prints `message` to stderr and exits with `code.exit_code()`   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mercado_core::{CoreError, Entity};
use mercado_store::StoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Error returned from command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CliError {
    /// Machine-readable error code, mapped to the process exit status
    pub code: ErrorCode,

    /// Human-readable message shown to the user
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No row given for a remove/show command
    NothingSelected,

    /// The row index is past the end of the list
    NotFound,

    /// Typed input could not become a product or customer
    ValidationError,

    /// A data file could not be written
    StorageError,

    /// Configuration could not be loaded
    ConfigError,
}

impl ErrorCode {
    /// Process exit status for this code.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::NothingSelected | ErrorCode::NotFound => 2,
            ErrorCode::ValidationError => 3,
            ErrorCode::StorageError => 4,
            ErrorCode::ConfigError => 5,
        }
    }
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// The prompt shown when a remove/show command names no row.
    ///
    /// ```text
    /// Select a product to remove.
    /// Select a customer to show.
    /// ```
    pub fn nothing_selected(entity: Entity, action: &str) -> Self {
        CliError::new(
            ErrorCode::NothingSelected,
            format!("Select a {} to {}.", entity, action),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Converts a repository error, naming the attempted action when no row
    /// was selected.
    pub fn from_core(err: CoreError, action: &str) -> Self {
        match err {
            CoreError::IndexOutOfRange {
                entity,
                index: None,
                ..
            } => CliError::nothing_selected(entity, action),
            e @ CoreError::IndexOutOfRange { .. } => CliError::new(ErrorCode::NotFound, e.to_string()),
            CoreError::Validation(e) => CliError::validation(e.to_string()),
        }
    }
}

/// Converts storage errors to CLI errors.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        // The store already logged the details; keep the cause for the user
        CliError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Converts config errors to CLI errors.
impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;
