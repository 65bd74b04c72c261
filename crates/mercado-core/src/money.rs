//! # Money Module
//!
//! Provides the `Money` type for shelf prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A price typed as "4.10" stored as f64 is 4.0999999999999996447...     │
//! │  and may print back as 4.1 or 4.09 depending on the formatter.         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "4.10" ──parse──► 410 cents ──save──► 410 ──load──► 410 ──► $4.10   │
//! │    The value on disk is exactly the value that was typed.              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mercado_core::money::Money;
//!
//! let price = Money::parse("4.50").unwrap();
//! assert_eq!(price.cents(), 450);
//! assert_eq!(price.to_string(), "$4.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64**: parsing never produces a negative value, but the type
///   stays signed so arithmetic on it cannot underflow silently
/// - **Single field tuple struct**: serializes as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "mercado/")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use mercado_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses a price typed by a person.
    ///
    /// ## Accepted Forms
    /// ```text
    /// "4"      → 400
    /// "4.5"    → 450
    /// "4.50"   → 450
    /// "4,50"   → 450   (comma decimal separator)
    /// " 12.00" → 1200  (surrounding whitespace ignored)
    /// ```
    ///
    /// ## Rejected Forms
    /// - empty text → `Required`
    /// - a leading `-` → `OutOfRange` (prices are never negative)
    /// - letters, more than one separator, more than two decimals →
    ///   `InvalidFormat`
    ///
    /// ## Example
    /// ```rust
    /// use mercado_core::money::Money;
    ///
    /// assert_eq!(Money::parse("4,50").unwrap().cents(), 450);
    /// assert!(Money::parse("abc").is_err());
    /// assert!(Money::parse("-1").is_err());
    /// ```
    pub fn parse(text: &str) -> ValidationResult<Money> {
        let text = text.trim();

        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        if text.starts_with('-') {
            return Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        let (whole, fraction) = match text.find(|c: char| c == '.' || c == ',') {
            Some(pos) => (&text[..pos], &text[pos + 1..]),
            None => (text, ""),
        };

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("must contain digits"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a number such as 4.50"));
        }
        if fraction.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let too_large = || ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX / 100,
        };

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };
        // "4.5" means fifty cents, not five
        let minor: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => fraction.parse().map_err(|_| too_large())?,
        };

        major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .map(Money)
            .ok_or_else(too_large)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
