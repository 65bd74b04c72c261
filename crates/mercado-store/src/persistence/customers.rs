//! # Customer Channel
//!
//! One customer per line, fields joined by a comma.
//!
//! ## File Layout (`clients.txt`)
//! ```text
//! Ana,Rua A,ana@x.com
//! Bia,Av. Central 100,bia@x.com
//! ```
//!
//! ## Known Limitation: No Escaping
//! Fields are written verbatim. A comma inside a field shifts everything
//! after it on reload, and anything past the third field is dropped:
//!
//! ```text
//! saved:    name="Jo"  address="Rua B, 10"  email="jo@x.com"
//! on disk:  Jo,Rua B, 10,jo@x.com
//! reloaded: name="Jo"  address="Rua B"      email=" 10"
//! ```
//!
//! Existing `clients.txt` files depend on this layout, so it is kept as is.
//!
//! ## Malformed Rows
//! A line with fewer than three fields (including a blank line) cannot be a
//! customer. It is skipped and reported in [`CustomerLoad::skipped`]; the
//! rows around it still load.

use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::error::StoreResult;
use crate::persistence::{read_if_exists, write_replacing};
use mercado_core::Customer;

/// Default customer file name.
pub const DEFAULT_CUSTOMERS_FILE: &str = "clients.txt";

/// A line of the customer file that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file.
    pub line_number: usize,
    pub content: String,
}

/// Result of reading a customer file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerLoad {
    pub customers: Vec<Customer>,
    pub skipped: Vec<SkippedRow>,
}

/// Formats a customer as one line of the file (without the newline).
pub fn format_customer_line(customer: &Customer) -> String {
    format!("{},{},{}", customer.name, customer.address, customer.email)
}

/// Parses one line of the file.
///
/// Returns `None` when the line has fewer than three comma-separated
/// fields. Fields beyond the third are ignored.
///
/// ```rust
/// use mercado_store::persistence::customers::parse_customer_line;
///
/// let ana = parse_customer_line("Ana,Rua A,ana@x.com").unwrap();
/// assert_eq!(ana.address, "Rua A");
///
/// assert!(parse_customer_line("Ana,Rua A").is_none());
/// ```
pub fn parse_customer_line(line: &str) -> Option<Customer> {
    let mut fields = line.split(',');

    let name = fields.next()?;
    let address = fields.next()?;
    let email = fields.next()?;

    Some(Customer::new(name, address, email))
}

/// Parses the full text of a customer file.
pub fn parse_customers(contents: &str) -> CustomerLoad {
    let mut load = CustomerLoad::default();

    for (i, line) in contents.lines().enumerate() {
        match parse_customer_line(line) {
            Some(customer) => load.customers.push(customer),
            None => load.skipped.push(SkippedRow {
                line_number: i + 1,
                content: line.to_string(),
            }),
        }
    }

    load
}

/// Saves every customer to `path`, one line each, in list order.
///
/// ## Returns
/// * `Ok(())` - File written
/// * `Err(StoreError::Io)` - Directory missing, permission denied, ...
pub fn save_customers(customers: &[Customer], path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();

    let mut contents = String::new();
    for customer in customers {
        contents.push_str(&format_customer_line(customer));
        contents.push('\n');
    }

    let result = write_replacing(path, contents.as_bytes());

    match &result {
        Ok(()) => info!(path = %path.display(), count = customers.len(), "Customers saved"),
        Err(e) => error!(path = %path.display(), error = %e, "Failed to save customers"),
    }

    result
}

/// Loads customers, reporting I/O failures and listing skipped rows.
///
/// A missing file yields an empty load.
pub fn try_load_customers(path: impl AsRef<Path>) -> StoreResult<CustomerLoad> {
    let path = path.as_ref();

    match read_if_exists(path)? {
        Some(contents) => Ok(parse_customers(&contents)),
        None => {
            debug!(path = %path.display(), "No customer file yet");
            Ok(CustomerLoad::default())
        }
    }
}

/// Loads customers, never failing.
///
/// ## Fallback Cases
/// ```text
/// file missing        → []                  (first run)
/// unreadable / binary → []                  (warn!)
/// malformed rows      → the other rows      (warn! per skipped row)
/// ```
pub fn load_customers(path: impl AsRef<Path>) -> Vec<Customer> {
    let path = path.as_ref();

    match try_load_customers(path) {
        Ok(load) => {
            for row in &load.skipped {
                warn!(
                    path = %path.display(),
                    line = row.line_number,
                    content = %row.content,
                    "Skipping malformed customer row"
                );
            }
            info!(
                path = %path.display(),
                count = load.customers.len(),
                skipped = load.skipped.len(),
                "Customers loaded"
            );
            load.customers
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not load customers, starting empty");
            Vec::new()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
