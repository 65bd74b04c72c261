//! # Persistence Channels
//!
//! Two independent files, two independent formats.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Persistence Channels                                 │
//! │                                                                         │
//! │  Repository.products ──► products::save_products ──► products.dat      │
//! │                          (one JSON snapshot, variant-tagged)           │
//! │                                                                         │
//! │  Repository.customers ─► customers::save_customers ─► clients.txt      │
//! │                          (name,address,email per line, no escaping)    │
//! │                                                                         │
//! │  Both channels:                                                        │
//! │  • save_* returns StoreResult<()> and logs failures                    │
//! │  • try_load_* returns StoreResult<..> with the exact failure           │
//! │  • load_* never fails: missing/corrupt file → empty list + warn!      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`products`] - Product snapshot channel
//! - [`customers`] - Customer text channel

pub mod customers;
pub mod products;

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// Reads a whole file, treating "does not exist" as `None`.
///
/// A missing file is the normal first-run state, not an error.
pub(crate) fn read_if_exists(path: &Path) -> StoreResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::io("read", path, e)),
    }
}

/// Writes `contents` to `path` by way of a sibling `.tmp` file and a rename.
///
/// A crash mid-write leaves the previous file intact.
pub(crate) fn write_replacing(path: &Path, contents: &[u8]) -> StoreResult<()> {
    let tmp = sibling_path(path, ".tmp");

    fs::write(&tmp, contents).map_err(|e| StoreError::io("write", &tmp, e))?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::io("replace", path, e));
    }

    Ok(())
}

/// Copies `path` to `<path>.bak`, replacing an older backup.
///
/// Used before overwriting a file that did not load cleanly, so whatever
/// the loader could not understand is still on disk afterwards.
pub(crate) fn back_up(path: &Path) -> StoreResult<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|e| StoreError::io("back up", path, e))?;
    Ok(backup)
}

pub(crate) fn backup_path(path: &Path) -> PathBuf {
    sibling_path(path, ".bak")
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
