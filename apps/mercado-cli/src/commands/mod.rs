//! # Commands Module
//!
//! One handler per subcommand.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (dispatch, save)
//! ├── product.rs   ◄─── product add/remove/list/show
//! └── customer.rs  ◄─── customer add/remove/list/show
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  lib.rs: store.load_repository()  ◄── both files, fail soft            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  handler(&mut Repository, &Store, args) -> CliResult<String>            │
//! │         │  mutate in memory                                             │
//! │         │  save the affected channel                                    │
//! │         ▼                                                               │
//! │  lib.rs prints the returned text to stdout                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers return their output instead of printing it so tests can check it.

pub mod customer;
pub mod product;

use mercado_core::Repository;
use mercado_store::Store;
use tracing::info;

use crate::cli::Command;
use crate::error::CliResult;

/// Runs one command against a loaded repository.
pub fn dispatch(command: Command, repo: &mut Repository, store: &Store) -> CliResult<String> {
    match command {
        Command::Product(cmd) => product::run(cmd, repo, store),
        Command::Customer(cmd) => customer::run(cmd, repo, store),
        Command::Save => save_all(repo, store),
    }
}

/// Writes both lists back to disk.
pub fn save_all(repo: &Repository, store: &Store) -> CliResult<String> {
    store.save_all(repo)?;

    info!(
        products = repo.products().len(),
        customers = repo.customers().len(),
        "Saved all records"
    );

    Ok(format!(
        "Saved {} products and {} customers.",
        repo.products().len(),
        repo.customers().len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercado_core::{Customer, Money, Product};
    use mercado_store::StoreConfig;

    #[test]
    fn test_save_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(StoreConfig::in_dir(dir.path()));

        let repo = Repository::from_parts(
            vec![Product::non_perishable("Rice", Money::from_cents(1299), "Tio", "2025-06-01")],
            vec![Customer::new("Ana", "Rua A", "ana@x.com")],
        );

        let out = dispatch(Command::Save, &mut repo.clone(), &store).unwrap();

        assert_eq!(out, "Saved 1 products and 1 customers.");
        assert_eq!(store.load_repository(), repo);
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(StoreConfig::in_dir(dir.path().join("absent")));

        let err = save_all(&Repository::new(), &store).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::StorageError);
    }
}
