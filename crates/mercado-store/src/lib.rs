//! # mercado-store: Flat-File Persistence for Mercado
//!
//! The Persistence Adapter: moves product and customer lists between a
//! [`mercado_core::Repository`] and two files on disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mercado Data Flow                                │
//! │                                                                         │
//! │  Facade command (product add ...)                                      │
//! │       │  mutate Repository, then save                                  │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 mercado-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  products.rs   │    │ customers.rs │  │   │
//! │  │   │  (store.rs)   │───►│ JSON snapshot  │    │ comma lines  │  │   │
//! │  │   │  two paths    │───►│ version + time │    │ no escaping  │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  data_dir/products.dat        data_dir/clients.txt                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! Loads fail soft (empty list, logged). Saves return [`StoreError`] and log.
//! A file that did not load completely is copied to `<file>.bak` before the
//! first save replaces it; if that copy fails the save is refused.
//! File handles live only for the duration of one call.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mercado_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::in_dir("./data"));
//! let mut repo = store.load_repository();
//! repo.remove_customer_at(Some(0))?;
//! store.save_customers(&repo)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod persistence;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use persistence::customers::{
    load_customers, save_customers, try_load_customers, CustomerLoad, SkippedRow,
};
pub use persistence::products::{load_products, save_products, try_load_products};
pub use store::{Store, StoreConfig};
