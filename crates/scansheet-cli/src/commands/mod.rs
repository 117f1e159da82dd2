//! Command implementations.

pub mod annotate;
pub mod export;
pub mod import;
pub mod list;
pub mod remove;
pub mod rename;
pub mod show;

use std::path::Path;

use scansheet::{Catalog, DatasetRecord, FileStore};

/// Open the catalog over the file store rooted at `store`.
pub fn open_catalog(store: &Path) -> Catalog<FileStore> {
    Catalog::new(FileStore::new(store))
}

/// Fetch a record or fail with a readable message.
pub fn require_record(
    catalog: &Catalog<FileStore>,
    id: &str,
) -> Result<DatasetRecord, Box<dyn std::error::Error>> {
    catalog.get(id).ok_or_else(|| {
        format!("Dataset not found: {}\nRun 'scansheet list' to see stored datasets.", id).into()
    })
}
