//! # Product Channel
//!
//! Saves the whole product list as one JSON snapshot and loads it back.
//!
//! ## File Layout (`products.dat`)
//! ```text
//! {
//!   "version": 1,
//!   "saved_at": "2024-01-01T12:00:00Z",
//!   "products": [
//!     { "name": "Milk", "price": 450, "brand": "Acme",
//!       "expiration_date": "2024-01-01",
//!       "kind": { "type": "non_perishable" } },
//!     { "name": "Yogurt", "price": 320, "brand": "Dairy Co",
//!       "expiration_date": "2024-02-01",
//!       "kind": { "type": "perishable", "storage_temperature": 4 } }
//!   ]
//! }
//! ```
//!
//! Order in `products` is repository order. Every save rewrites the file.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::persistence::{read_if_exists, write_replacing};
use mercado_core::Product;

/// Snapshot format written by this version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Default product file name.
pub const DEFAULT_PRODUCTS_FILE: &str = "products.dat";

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    products: &'a [Product],
}

/// A product snapshot as read from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub products: Vec<Product>,
}

#[derive(Deserialize)]
struct SnapshotHeader {
    version: u32,
}

/// Saves every product to `path`, replacing what was there.
///
/// ## Returns
/// * `Ok(())` - File written
/// * `Err(StoreError::Io)` - Directory missing, permission denied, ...
///
/// The failure is also logged; the caller's list is not touched either way.
pub fn save_products(products: &[Product], path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();

    let result = serde_json::to_vec_pretty(&SnapshotRef {
        version: SNAPSHOT_VERSION,
        saved_at: Utc::now(),
        products,
    })
    .map_err(StoreError::from)
    .and_then(|bytes| write_replacing(path, &bytes));

    match &result {
        Ok(()) => info!(path = %path.display(), count = products.len(), "Products saved"),
        Err(e) => error!(path = %path.display(), error = %e, "Failed to save products"),
    }

    result
}

/// Reads the full snapshot at `path`.
///
/// ## Returns
/// * `Ok(None)` - No file yet
/// * `Ok(Some(snapshot))` - File parsed
/// * `Err(..)` - Unreadable, malformed or from another snapshot version
pub fn read_snapshot(path: impl AsRef<Path>) -> StoreResult<Option<ProductSnapshot>> {
    let path = path.as_ref();

    let Some(contents) = read_if_exists(path)? else {
        return Ok(None);
    };

    // Check the version before the body so a newer layout is reported as
    // such, not as a parse error somewhere inside `products`.
    let header: SnapshotHeader = serde_json::from_str(&contents)?;
    if header.version != SNAPSHOT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: header.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    Ok(Some(serde_json::from_str(&contents)?))
}

/// Loads products, reporting exactly what went wrong.
///
/// A missing file is not an error: it yields an empty list.
pub fn try_load_products(path: impl AsRef<Path>) -> StoreResult<Vec<Product>> {
    let path = path.as_ref();

    match read_snapshot(path)? {
        Some(snapshot) => {
            debug!(
                path = %path.display(),
                count = snapshot.products.len(),
                saved_at = %snapshot.saved_at,
                "Product snapshot read"
            );
            Ok(snapshot.products)
        }
        None => {
            debug!(path = %path.display(), "No product file yet");
            Ok(Vec::new())
        }
    }
}

/// Loads products, falling back to an empty list on any failure.
///
/// ## Fallback Cases
/// ```text
/// file missing       → []  (first run, logged at debug)
/// permission denied  → []  (warn!)
/// not JSON / garbage → []  (warn!)
/// other version      → []  (warn!)
/// ```
pub fn load_products(path: impl AsRef<Path>) -> Vec<Product> {
    let path = path.as_ref();

    match try_load_products(path) {
        Ok(products) => {
            info!(path = %path.display(), count = products.len(), "Products loaded");
            products
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not load products, starting empty");
            Vec::new()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mercado_core::{Money, ProductKind};
    use std::fs;

    fn sample() -> Vec<Product> {
        vec![
            Product::non_perishable("Milk", Money::from_cents(450), "Acme", "2024-01-01"),
            Product::perishable("Yogurt", Money::from_cents(320), "Dairy Co", "2024-02-01", 4),
            Product::perishable("Peas", Money::from_cents(199), "Frosty", "", -18),
        ]
    }

    #[test]
    fn test_round_trip_preserves_order_and_variant() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PRODUCTS_FILE);

        save_products(&sample(), &path).unwrap();
        let loaded = load_products(&path);

        assert_eq!(loaded, sample());
        assert_eq!(loaded[0].kind(), ProductKind::NonPerishable);
        assert_eq!(loaded[2].storage_temperature(), Some(-18));
    }

    #[test]
    fn test_save_empty_list_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PRODUCTS_FILE);

        save_products(&sample(), &path).unwrap();
        save_products(&[], &path).unwrap();

        assert!(try_load_products(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-written.dat");

        assert!(try_load_products(&path).unwrap().is_empty());
        assert!(load_products(&path).is_empty());
    }

    #[test]
    fn test_corrupt_file_soft_and_strict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PRODUCTS_FILE);
        fs::write(&path, b"\xac\xed\x00\x05 not json").unwrap();

        assert!(load_products(&path).is_empty());

        fs::write(&path, "{ \"version\": 1, \"products\": [ { \"name\": ").unwrap();
        let err = try_load_products(&path).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn test_other_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PRODUCTS_FILE);
        fs::write(
            &path,
            r#"{"version": 2, "saved_at": "2024-01-01T00:00:00Z", "items": []}"#,
        )
        .unwrap();

        let err = try_load_products(&path).unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnsupportedVersion {
                found: 2,
                expected: SNAPSHOT_VERSION
            }
        ));
        assert!(load_products(&path).is_empty());
    }

    #[test]
    fn test_invalid_product_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PRODUCTS_FILE);
        fs::write(
            &path,
            r#"{"version": 1, "saved_at": "2024-01-01T00:00:00Z", "products": [
                {"name": "", "price": -500, "brand": "Acme", "expiration_date": "",
                 "kind": {"type": "non_perishable"}}
            ]}"#,
        )
        .unwrap();

        let err = try_load_products(&path).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
        assert!(load_products(&path).is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(DEFAULT_PRODUCTS_FILE);

        let err = save_products(&sample(), &path).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_snapshot_records_version_and_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_PRODUCTS_FILE);
        let before = Utc::now();

        save_products(&sample(), &path).unwrap();
        let snapshot = read_snapshot(&path).unwrap().unwrap();

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert!(snapshot.saved_at >= before);
        assert_eq!(snapshot.products.len(), 3);
    }
}
