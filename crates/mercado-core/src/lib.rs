//! # mercado-core: Pure Business Logic for Mercado
//!
//! Products, customers and the repository that holds them, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mercado Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Facade (mercado CLI)                         │   │
//! │  │    product add / remove / list / show, customer ..., save      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mercado-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ repository │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ Repository │  │   rules   │  │   │
//! │  │   │  Customer │  │  parsing  │  │  row index │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                mercado-store (Persistence Adapter)              │   │
//! │  │              products.dat snapshot, clients.txt lines           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductKind, Customer)
//! - [`money`] - Money type with integer cents
//! - [`repository`] - Ordered in-memory lists with row-index removal
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing rules
//!
//! ## Example Usage
//!
//! ```rust
//! use mercado_core::{Money, Product, Repository};
//!
//! let mut repo = Repository::new();
//! repo.add_product(Product::non_perishable("Milk", Money::from_cents(450), "Acme", "2024-01-01"));
//!
//! let removed = repo.remove_product_at(Some(0)).unwrap();
//! assert_eq!(removed.name(), "Milk");
//! assert!(repo.remove_product_at(Some(0)).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod repository;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, Entity, ValidationError};
pub use money::Money;
pub use repository::Repository;
pub use types::*;
