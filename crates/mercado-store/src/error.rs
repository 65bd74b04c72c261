//! # Store Error Types
//!
//! Error types for file persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path and the action          │
//! │       │                                                                 │
//! │       ├── load_*  → logged with warn!, caller gets an empty list       │
//! │       │                                                                 │
//! │       └── save_*  → logged with error!, returned to the caller         │
//! │                     (in-memory state is kept as it was)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read, written or renamed.
    ///
    /// ## When This Occurs
    /// - Directory doesn't exist
    /// - Permission denied
    /// - Disk full
    /// - File content is not UTF-8 (customer file)
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The product file is not a valid snapshot.
    #[error("Product snapshot is malformed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The product file was written by an incompatible version.
    #[error("Unsupported product snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl StoreError {
    /// Creates an Io error for the given action and path.
    pub fn io(action: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
