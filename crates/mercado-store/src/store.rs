//! # Store Handle
//!
//! Bundles the two file paths of an install and moves whole lists between
//! them and a [`Repository`].
//!
//! ## Startup and Save Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Lifecycle                                    │
//! │                                                                         │
//! │  StoreConfig::in_dir(data_dir) ← products.dat + clients.txt            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(config)                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.load_repository() ──► Repository (empty lists on first run)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  facade mutates the Repository                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.save_products(&repo) / store.save_customers(&repo)              │
//! │                                                                         │
//! │  The Store holds paths only. It never keeps a copy of either list.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cell::Cell;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::error::StoreResult;
use crate::persistence::customers::{self, DEFAULT_CUSTOMERS_FILE};
use crate::persistence::products::{self, DEFAULT_PRODUCTS_FILE};
use crate::persistence::{back_up, backup_path};
use mercado_core::Repository;

// =============================================================================
// Configuration
// =============================================================================

/// Where the two data files live.
///
/// ## Example
/// ```rust
/// use mercado_store::StoreConfig;
///
/// let config = StoreConfig::in_dir("/var/lib/mercado").customers_file("clientes.txt");
/// assert!(config.customers_path.ends_with("clientes.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub products_path: PathBuf,
    pub customers_path: PathBuf,
}

impl StoreConfig {
    /// Explicit paths for both files.
    pub fn new(products_path: impl Into<PathBuf>, customers_path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            products_path: products_path.into(),
            customers_path: customers_path.into(),
        }
    }

    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        StoreConfig {
            products_path: dir.join(DEFAULT_PRODUCTS_FILE),
            customers_path: dir.join(DEFAULT_CUSTOMERS_FILE),
        }
    }

    /// Replaces the product file name, keeping its directory.
    pub fn products_file(mut self, name: impl AsRef<Path>) -> Self {
        self.products_path = self.products_path.with_file_name(name.as_ref());
        self
    }

    /// Replaces the customer file name, keeping its directory.
    pub fn customers_file(mut self, name: impl AsRef<Path>) -> Self {
        self.customers_path = self.customers_path.with_file_name(name.as_ref());
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// What the last load found in one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileState {
    /// Loaded completely, or not there yet.
    Intact,
    /// Some or all of it could not be loaded; copy it before overwriting.
    Lossy,
    /// Copied to `<file>.bak` by this store.
    BackedUp,
}

/// File-backed persistence for one install.
///
/// ## Overwrite Protection
/// ```text
/// load_repository()
///   products.dat unreadable / other version / invalid ──┐
///   clients.txt unreadable / has skipped rows ──────────┤ marked Lossy
///                                                       ▼
/// save_*()  Lossy ──► copy to <file>.bak ──► write new file
///                         │
///                         └── copy fails ──► save refused, file untouched
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
    products_file: Cell<FileState>,
    customers_file: Cell<FileState>,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Store {
            config,
            products_file: Cell::new(FileState::Intact),
            customers_file: Cell::new(FileState::Intact),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Builds a repository from both files.
    ///
    /// Never fails: a missing or unreadable file contributes an empty list.
    /// A file that did not load completely is remembered, and the next save
    /// to it first keeps a copy in `<file>.bak`.
    pub fn load_repository(&self) -> Repository {
        let path = &self.config.products_path;
        let products = match products::try_load_products(path) {
            Ok(list) => {
                self.products_file.set(FileState::Intact);
                list
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not load products, starting empty");
                self.products_file.set(FileState::Lossy);
                Vec::new()
            }
        };

        let path = &self.config.customers_path;
        let customers = match customers::try_load_customers(path) {
            Ok(load) if load.skipped.is_empty() => {
                self.customers_file.set(FileState::Intact);
                load.customers
            }
            Ok(load) => {
                for row in &load.skipped {
                    warn!(
                        path = %path.display(),
                        line = row.line_number,
                        content = %row.content,
                        "Skipping malformed customer row"
                    );
                }
                self.customers_file.set(FileState::Lossy);
                load.customers
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not load customers, starting empty");
                self.customers_file.set(FileState::Lossy);
                Vec::new()
            }
        };

        info!(
            products = products.len(),
            customers = customers.len(),
            "Repository loaded"
        );

        Repository::from_parts(products, customers)
    }

    /// Writes the repository's products to the product file.
    pub fn save_products(&self, repo: &Repository) -> StoreResult<()> {
        keep_copy_if_lossy(&self.products_file, &self.config.products_path)?;
        products::save_products(repo.products(), &self.config.products_path)
    }

    /// Writes the repository's customers to the customer file.
    pub fn save_customers(&self, repo: &Repository) -> StoreResult<()> {
        keep_copy_if_lossy(&self.customers_file, &self.config.customers_path)?;
        customers::save_customers(repo.customers(), &self.config.customers_path)
    }

    /// Writes both files.
    ///
    /// Both saves are attempted even when the first fails; the first error
    /// is returned.
    pub fn save_all(&self, repo: &Repository) -> StoreResult<()> {
        let products = self.save_products(repo);
        let customers = self.save_customers(repo);
        products.and(customers)
    }

    /// Backup files this store wrote before overwriting a lossy file.
    pub fn backups(&self) -> Vec<PathBuf> {
        [
            (&self.products_file, &self.config.products_path),
            (&self.customers_file, &self.config.customers_path),
        ]
        .into_iter()
        .filter(|(state, _)| state.get() == FileState::BackedUp)
        .map(|(_, path)| backup_path(path))
        .collect()
    }
}

fn keep_copy_if_lossy(state: &Cell<FileState>, path: &Path) -> StoreResult<()> {
    if state.get() != FileState::Lossy {
        return Ok(());
    }

    match back_up(path) {
        Ok(backup) => {
            warn!(
                path = %path.display(),
                backup = %backup.display(),
                "File did not load completely; kept a copy before overwriting"
            );
            state.set(FileState::BackedUp);
            Ok(())
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Refusing to overwrite a file that could not be backed up");
            Err(e)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
