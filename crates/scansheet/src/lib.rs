//! Scansheet: dataset store and annotation engine for scan-to-sheet
//! workflows.
//!
//! Scansheet loads a delimited dataset, lets a session enrich each row
//! with a scanned code value, and persists named datasets across sessions
//! in a keyed catalog.
//!
//! # Core Principles
//!
//! - **Catalog is authoritative**: the active table is a detached working
//!   copy until explicitly synced back
//! - **Rectangular always**: column mutations apply to every row
//!   atomically
//! - **No-op on misuse**: disabled transitions reject silently instead of
//!   throwing
//!
//! # Example
//!
//! ```
//! use scansheet::catalog::{Catalog, MemoryStore};
//! use scansheet::session::Session;
//!
//! let catalog = Catalog::new(MemoryStore::new());
//! let grid = vec![
//!     vec!["sku".to_string(), "name".to_string()],
//!     vec!["1".to_string(), "Laptop".to_string()],
//! ];
//! let record = catalog.create("inventory.csv", "text/csv", grid).unwrap();
//!
//! let mut session = Session::open(&record).unwrap();
//! session.set_column_name("code");
//! session.commit_column();
//! session.select_row(0);
//! session.set_scanned_value("8901234");
//! session.apply_scanned_value();
//! session.sync(&catalog).unwrap();
//!
//! let stored = catalog.get(&record.id).unwrap();
//! assert_eq!(stored.data[1][0], "8901234");
//! ```

pub mod catalog;
pub mod error;
pub mod input;
pub mod scan;
pub mod session;
pub mod table;

pub use catalog::{ByteStore, Catalog, DatasetRecord, FileStore, MemoryStore};
pub use error::{Result, ScansheetError};
pub use input::{ParsedSource, Parser, ParserConfig};
pub use scan::{DecodeSource, LineSource, Scanner};
pub use session::{AnnotationController, ColumnState, Session};
pub use table::{RowMatch, Table};
