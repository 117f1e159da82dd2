//! Durable catalog of named datasets.
//!
//! The catalog is the authoritative file history: a keyed collection of
//! [`DatasetRecord`]s persisted as one JSON blob in a byte store. Every
//! mutating call rewrites the entire serialized list, so write atomicity
//! is whole-catalog granularity (single active session assumed).
//!
//! # Usage
//!
//! ```
//! use scansheet::catalog::{Catalog, MemoryStore};
//!
//! let catalog = Catalog::new(MemoryStore::new());
//! let grid = vec![
//!     vec!["sku".to_string(), "name".to_string()],
//!     vec!["1".to_string(), "Laptop".to_string()],
//! ];
//!
//! let record = catalog.create("inventory.csv", "text/csv", grid).unwrap();
//! assert_eq!(catalog.list().len(), 1);
//!
//! catalog.update(&record.id, |mut data| {
//!     data[1][1] = "Laptop Pro".to_string();
//!     data
//! }).unwrap();
//! ```

mod ids;
mod index;
mod names;
mod record;
mod store;

pub use ids::new_dataset_id;
pub use index::{CATALOG_KEY, Catalog};
pub use names::{DEFAULT_EXTENSION, resolve_unique};
pub use record::DatasetRecord;
pub use store::{ByteStore, FileStore, MemoryStore};
