//! # Error Types
//!
//! Domain-specific error types for mercado-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mercado-core errors (this file)                                       │
//! │  ├── CoreError        - Repository failures (bad row index)            │
//! │  └── ValidationError  - Malformed user input (price, temperature)      │
//! │                                                                         │
//! │  mercado-store errors (separate crate)                                 │
//! │  └── StoreError       - File read/write failures                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both types here propagate to the facade as explicit failures. Nothing in
//! this crate swallows an error.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// The kind of record a repository operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Product,
    Customer,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Product => f.write_str("product"),
            Entity::Customer => f.write_str("customer"),
        }
    }
}

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A repository operation targeted a row that does not exist.
    ///
    /// ## When This Occurs
    /// - No row is selected in the product/customer table (`index: None`)
    /// - The selected index is past the end of the list
    ///
    /// The repository is left untouched when this is returned.
    #[error("{}", describe_missing(*entity, *index, *len))]
    IndexOutOfRange {
        entity: Entity,
        index: Option<usize>,
        len: usize,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

fn describe_missing(entity: Entity, index: Option<usize>, len: usize) -> String {
    match index {
        None => format!("No {} selected", entity),
        Some(i) => format!("No {} at row {} ({} in list)", entity, i, len),
    }
}

impl CoreError {
    /// Returns true when the caller never selected a row at all.
    pub fn is_nothing_selected(&self) -> bool {
        matches!(self, CoreError::IndexOutOfRange { index: None, .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when text typed into the facade cannot become an entity
/// field. They are surfaced for re-prompting and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
