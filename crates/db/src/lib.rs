//! Persistence layer for the Payflow store.
//!
//! This crate provides:
//! - A JSON-file [`StoreBackend`](payflow_core::StoreBackend)
//! - The demo seed dataset

pub mod json_file;
pub mod seed;

pub use json_file::JsonFileBackend;
pub use seed::demo_state;

use std::path::Path;

use chrono::Utc;
use payflow_core::{Store, StoreError};

/// Opens the store persisted at `path`.
///
/// A missing file is created from the demo seed when `seed_if_missing` is
/// set, otherwise the store starts empty.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed, or if
/// the initial document cannot be written.
pub fn open(path: impl AsRef<Path>, seed_if_missing: bool) -> Result<Store, StoreError> {
    let backend = JsonFileBackend::new(path.as_ref());
    if seed_if_missing {
        Store::open_or_seed(backend, || demo_state(Utc::now()))
    } else {
        Store::open(backend)
    }
}
