//! # Repository
//!
//! The in-memory owner of the product and customer lists.
//!
//! ## Row Index Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Facade Table ↔ Repository                            │
//! │                                                                         │
//! │   Table row   Repository.products                                       │
//! │   ─────────   ────────────────────                                      │
//! │       0   ──► [0] Milk        (added first)                             │
//! │       1   ──► [1] Yogurt                                                │
//! │       2   ──► [2] Rice        (added last)                              │
//! │                                                                         │
//! │   remove_product_at(Some(1)) → returns Yogurt, Rice moves to row 1      │
//! │   remove_product_at(None)    → IndexOutOfRange ("No product selected")  │
//! │   remove_product_at(Some(3)) → IndexOutOfRange, list untouched          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Insertion order is display order. Names are not unique.
//!
//! Nothing here touches the disk: the facade mutates, then asks
//! `mercado-store` to save.

use crate::error::{CoreError, CoreResult, Entity};
use crate::types::{Customer, Product};

/// Ordered product and customer lists.
///
/// Owned by whoever drives the application and passed to it explicitly;
/// there is no global instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    products: Vec<Product>,
    customers: Vec<Customer>,
}

impl Repository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository from previously loaded lists.
    pub fn from_parts(products: Vec<Product>, customers: Vec<Customer>) -> Self {
        Repository {
            products,
            customers,
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Appends a product to the end of the list.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes and returns the product at `index`.
    ///
    /// `None` means the caller has no row selected. Both that and an index
    /// past the end fail with [`CoreError::IndexOutOfRange`] and leave the
    /// list unchanged.
    pub fn remove_product_at(&mut self, index: Option<usize>) -> CoreResult<Product> {
        let i = checked_index(Entity::Product, index, self.products.len())?;
        Ok(self.products.remove(i))
    }

    /// Returns the product at `index` (for a "details" view).
    pub fn product_at(&self, index: Option<usize>) -> CoreResult<&Product> {
        let i = checked_index(Entity::Product, index, self.products.len())?;
        Ok(&self.products[i])
    }

    /// Read-only view of all products, in insertion order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Swaps in a freshly loaded product list.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Appends a customer to the end of the list.
    pub fn add_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Removes and returns the customer at `index`.
    ///
    /// Same failure rules as [`Repository::remove_product_at`].
    pub fn remove_customer_at(&mut self, index: Option<usize>) -> CoreResult<Customer> {
        let i = checked_index(Entity::Customer, index, self.customers.len())?;
        Ok(self.customers.remove(i))
    }

    pub fn customer_at(&self, index: Option<usize>) -> CoreResult<&Customer> {
        let i = checked_index(Entity::Customer, index, self.customers.len())?;
        Ok(&self.customers[i])
    }

    /// Read-only view of all customers, in insertion order.
    #[inline]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn replace_customers(&mut self, customers: Vec<Customer>) {
        self.customers = customers;
    }
}

fn checked_index(entity: Entity, index: Option<usize>, len: usize) -> CoreResult<usize> {
    match index {
        Some(i) if i < len => Ok(i),
        _ => Err(CoreError::IndexOutOfRange { entity, index, len }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(name: &str) -> Product {
        Product::non_perishable(name, Money::from_cents(100), "Brand", "2025-01-01")
    }

    fn names(repo: &Repository) -> Vec<&str> {
        repo.products().iter().map(|p| p.name()).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut repo = Repository::new();
        repo.add_product(product("Milk"));
        repo.add_product(product("Bread"));
        repo.add_product(product("Milk"));

        assert_eq!(names(&repo), vec!["Milk", "Bread", "Milk"]);
    }

    #[test]
    fn test_remove_product_returns_element_and_keeps_order() {
        let mut repo = Repository::new();
        for name in ["A", "B", "C", "D"] {
            repo.add_product(product(name));
        }

        let removed = repo.remove_product_at(Some(1)).unwrap();
        assert_eq!(removed.name(), "B");
        assert_eq!(names(&repo), vec!["A", "C", "D"]);

        let removed = repo.remove_product_at(Some(2)).unwrap();
        assert_eq!(removed.name(), "D");
        assert_eq!(names(&repo), vec!["A", "C"]);
    }

    #[test]
    fn test_remove_product_out_of_range_leaves_state() {
        let mut repo = Repository::new();
        repo.add_product(product("Milk"));
        let before = repo.clone();

        let err = repo.remove_product_at(Some(1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::IndexOutOfRange {
                entity: Entity::Product,
                index: Some(1),
                len: 1
            }
        ));
        assert_eq!(repo, before);

        let err = repo.remove_product_at(None).unwrap_err();
        assert!(err.is_nothing_selected());
        assert_eq!(repo, before);
    }

    #[test]
    fn test_remove_from_empty_fails() {
        let mut repo = Repository::new();
        assert!(repo.remove_product_at(Some(0)).is_err());
        assert!(repo.remove_customer_at(Some(0)).is_err());
    }

    #[test]
    fn test_customer_operations() {
        let mut repo = Repository::new();
        repo.add_customer(Customer::new("Ana", "Rua A", "ana@x.com"));
        repo.add_customer(Customer::new("Bia", "Rua B", "bia@x.com"));

        assert_eq!(repo.customer_at(Some(1)).unwrap().name, "Bia");
        assert!(repo.customer_at(Some(2)).is_err());

        let removed = repo.remove_customer_at(Some(0)).unwrap();
        assert_eq!(removed.name, "Ana");
        assert_eq!(repo.customers().len(), 1);
        assert_eq!(repo.customers()[0].name, "Bia");

        let err = repo.remove_customer_at(None).unwrap_err();
        assert_eq!(err.to_string(), "No customer selected");
    }

    #[test]
    fn test_product_at_and_replace() {
        let mut repo = Repository::from_parts(vec![product("Milk")], Vec::new());
        assert_eq!(repo.product_at(Some(0)).unwrap().name(), "Milk");
        assert!(repo.product_at(None).is_err());

        repo.replace_products(vec![product("Rice"), product("Beans")]);
        assert_eq!(names(&repo), vec!["Rice", "Beans"]);

        repo.replace_customers(vec![Customer::new("Jo", "Rua C", "jo@x.com")]);
        assert_eq!(repo.customers().len(), 1);
    }
}
