//! # Domain Types
//!
//! The two records a supermarket keeps: products on the shelf and customers.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────────┐          ┌─────────────────┐             │
//! │  │        Product           │          │    Customer     │             │
//! │  │  ──────────────────────  │          │  ─────────────  │             │
//! │  │  name                    │          │  name           │             │
//! │  │  price (Money)           │          │  address        │             │
//! │  │  brand                   │          │  email          │             │
//! │  │  expiration_date (text)  │          └─────────────────┘             │
//! │  │  kind ───────────┐       │                                          │
//! │  └──────────────────┼───────┘                                          │
//! │                     ▼                                                   │
//! │  ┌──────────────────────────────────────────┐                          │
//! │  │ ProductKind                              │                          │
//! │  │  Perishable { storage_temperature: i32 } │                          │
//! │  │  NonPerishable                           │                          │
//! │  └──────────────────────────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fixed Variant
//! A product's kind is chosen in its constructor and there is no setter, so a
//! perishable product can never turn into a non-perishable one (or back).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::error::ValidationError;
use crate::validation::{
    parse_storage_temperature, validate_price, validate_product_name, ValidationResult,
};

// =============================================================================
// Product Kind
// =============================================================================

/// The variant of a product, carrying the fields only that variant has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "mercado/")]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    /// Needs refrigeration or freezing.
    Perishable {
        /// Degrees Celsius; negative for frozen goods.
        storage_temperature: i32,
    },
    /// Shelf-stable goods.
    NonPerishable,
}

impl ProductKind {
    /// Label shown as the first line of [`Product::describe`].
    pub const fn label(&self) -> &'static str {
        match self {
            ProductKind::Perishable { .. } => "Perishable Product",
            ProductKind::NonPerishable => "Non-Perishable Product",
        }
    }

    #[inline]
    pub const fn is_perishable(&self) -> bool {
        matches!(self, ProductKind::Perishable { .. })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product on the supermarket's shelf.
///
/// ## Invariants
/// - `name` is not blank and at most [`MAX_NAME_LEN`](crate::validation::MAX_NAME_LEN) characters
/// - `price` is not negative
///
/// Deserializing goes through the same checks, so a hand-edited product
/// file cannot smuggle in a product [`Product::new_checked`] would refuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "ProductRecord")]
#[ts(export, export_to = "mercado/")]
pub struct Product {
    name: String,
    price: Money,
    brand: String,
    /// Free text as typed; never parsed as a date.
    expiration_date: String,
    kind: ProductKind,
}

impl Product {
    /// Creates a perishable product.
    pub fn perishable(
        name: impl Into<String>,
        price: Money,
        brand: impl Into<String>,
        expiration_date: impl Into<String>,
        storage_temperature: i32,
    ) -> Self {
        debug_assert!(!price.is_negative(), "negative price");
        Product {
            name: name.into(),
            price,
            brand: brand.into(),
            expiration_date: expiration_date.into(),
            kind: ProductKind::Perishable {
                storage_temperature,
            },
        }
    }

    /// Creates a non-perishable product.
    pub fn non_perishable(
        name: impl Into<String>,
        price: Money,
        brand: impl Into<String>,
        expiration_date: impl Into<String>,
    ) -> Self {
        debug_assert!(!price.is_negative(), "negative price");
        Product {
            name: name.into(),
            price,
            brand: brand.into(),
            expiration_date: expiration_date.into(),
            kind: ProductKind::NonPerishable,
        }
    }

    /// Builds a product from the raw text a person typed.
    ///
    /// ## User Workflow
    /// ```text
    /// "Add product" form
    ///      │  name, price, brand, expiration, [temperature]
    ///      ▼
    /// new_checked() ← THIS FUNCTION
    ///      │
    ///      ├── empty name?           → ValidationError::Required
    ///      ├── price "abc"?          → ValidationError::InvalidFormat
    ///      ├── temperature "cold"?   → ValidationError::InvalidFormat
    ///      │
    ///      └── OK → Perishable if a temperature was given,
    ///               NonPerishable otherwise
    /// ```
    pub fn new_checked(input: ProductInput<'_>) -> ValidationResult<Self> {
        validate_product_name(input.name)?;
        let price = Money::parse(input.price)?;

        let product = match input.storage_temperature {
            Some(text) => Product::perishable(
                input.name.trim(),
                price,
                input.brand,
                input.expiration_date,
                parse_storage_temperature(text)?,
            ),
            None => Product::non_perishable(
                input.name.trim(),
                price,
                input.brand,
                input.expiration_date,
            ),
        };

        Ok(product)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[inline]
    pub fn expiration_date(&self) -> &str {
        &self.expiration_date
    }

    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Storage temperature, present only for perishable products.
    pub fn storage_temperature(&self) -> Option<i32> {
        match self.kind {
            ProductKind::Perishable {
                storage_temperature,
            } => Some(storage_temperature),
            ProductKind::NonPerishable => None,
        }
    }

    /// Multi-line summary for a "details" view.
    ///
    /// Lines, in order: type label, price, brand, expiration date and, for
    /// perishable products only, storage temperature.
    ///
    /// ```rust
    /// use mercado_core::{Money, Product};
    ///
    /// let milk = Product::non_perishable("Milk", Money::from_cents(450), "Acme", "2024-01-01");
    /// assert_eq!(
    ///     milk.describe(),
    ///     "Non-Perishable Product\nPrice: $4.50\nBrand: Acme\nExpiration Date: 2024-01-01"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        let common = format!(
            "{}\nPrice: {}\nBrand: {}\nExpiration Date: {}",
            self.kind.label(),
            self.price,
            self.brand,
            self.expiration_date
        );

        match self.kind {
            ProductKind::Perishable {
                storage_temperature,
            } => format!(
                "{}\nStorage Temperature: {}°C",
                common, storage_temperature
            ),
            ProductKind::NonPerishable => common,
        }
    }
}

/// A product exactly as stored, before the invariants are checked.
#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    price: Money,
    brand: String,
    expiration_date: String,
    kind: ProductKind,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ValidationError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        validate_product_name(&record.name)?;
        validate_price(record.price)?;

        Ok(Product {
            name: record.name,
            price: record.price,
            brand: record.brand,
            expiration_date: record.expiration_date,
            kind: record.kind,
        })
    }
}

/// Raw, unparsed product fields as collected by a facade form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductInput<'a> {
    pub name: &'a str,
    pub price: &'a str,
    pub brand: &'a str,
    pub expiration_date: &'a str,
    /// `Some` makes the product perishable.
    pub storage_temperature: Option<&'a str>,
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer. All fields are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "mercado/")]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub email: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Customer {
            name: name.into(),
            address: address.into(),
            email: email.into(),
        }
    }

    /// Multi-line summary for a "details" view.
    pub fn describe(&self) -> String {
        format!(
            "Name: {}\nAddress: {}\nEmail: {}",
            self.name, self.address, self.email
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
