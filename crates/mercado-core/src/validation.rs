//! # Validation Module
//!
//! Turns text typed into the facade into entity fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Facade (CLI flags / GUI prompts)                             │
//! │  └── Collects raw text, nothing else                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name must not be empty                                            │
//! │  ├── price must parse to non-negative cents (see money.rs)             │
//! │  └── storage temperature must be an integer                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Product constructors                                         │
//! │  └── Only ever see well-formed values                                  │
//! │                                                                         │
//! │  Brand, expiration date and every customer field are free text and     │
//! │  are accepted as typed.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted.
pub const MAX_NAME_LEN: usize = 200;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use mercado_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Milk 1L").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price already in cents: it must not be negative.
///
/// [`Money::parse`] never yields a negative value; this catches prices that
/// arrive some other way, such as a hand-edited product file.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Parses a storage temperature in whole degrees Celsius.
///
/// Negative values are normal (frozen goods).
///
/// ```rust
/// use mercado_core::validation::parse_storage_temperature;
///
/// assert_eq!(parse_storage_temperature("-18").unwrap(), -18);
/// assert!(parse_storage_temperature("cold").is_err());
/// ```
pub fn parse_storage_temperature(text: &str) -> ValidationResult<i32> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "storage temperature".to_string(),
        });
    }

    text.parse::<i32>().map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
            ValidationError::OutOfRange {
                field: "storage temperature".to_string(),
                min: i32::MIN as i64,
                max: i32::MAX as i64,
            }
        }
        _ => ValidationError::InvalidFormat {
            field: "storage temperature".to_string(),
            reason: "must be a whole number of degrees".to_string(),
        },
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Milk").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("\t ").is_err());
        assert!(validate_product_name(&"A".repeat(MAX_NAME_LEN)).is_ok());
        assert!(matches!(
            validate_product_name(&"A".repeat(MAX_NAME_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(450)).is_ok());
        assert!(matches!(
            validate_price(Money::from_cents(-1)),
            Err(ValidationError::OutOfRange { min: 0, .. })
        ));
    }

    #[test]
    fn test_parse_storage_temperature() {
        assert_eq!(parse_storage_temperature("4").unwrap(), 4);
        assert_eq!(parse_storage_temperature(" -18 ").unwrap(), -18);
        assert_eq!(parse_storage_temperature("+2").unwrap(), 2);

        assert!(matches!(
            parse_storage_temperature(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_storage_temperature("4.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_storage_temperature("99999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
