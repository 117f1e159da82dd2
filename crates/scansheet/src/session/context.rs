//! Session context: the active dataset and its annotation state.

use crate::catalog::{ByteStore, Catalog, DEFAULT_EXTENSION, DatasetRecord};
use crate::error::Result;
use crate::input::serialize_grid;
use crate::table::{RowMatch, Table};

use super::annotation::AnnotationController;

/// Default export name when a session has no display name to derive from.
const FALLBACK_EXPORT_NAME: &str = "file_annotated.csv";

/// Suffix inserted before the extension of an exported file.
const EXPORT_SUFFIX: &str = "_annotated";

/// One editing session over a dataset.
///
/// The session holds a detached working copy of the record's grid; the
/// catalog stays authoritative until [`Session::sync`] writes the working
/// copy back. Dropping (deselecting) a session discards the annotation
/// state and any unsynced edits, never the persisted record.
#[derive(Debug, Clone)]
pub struct Session {
    record_id: String,
    display_name: String,
    table: Table,
    controller: AnnotationController,
}

impl Session {
    /// Open a session on a stored record, detaching a working copy.
    pub fn open(record: &DatasetRecord) -> Result<Self> {
        Ok(Self {
            record_id: record.id.clone(),
            display_name: record.display_name.clone(),
            table: Table::from_grid(record.data.clone())?,
            controller: AnnotationController::new(),
        })
    }

    /// Id of the active record.
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Display name of the active record.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The working table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The annotation state machine.
    pub fn controller(&self) -> &AnnotationController {
        &self.controller
    }

    /// Rows of the working table matching a free-text query.
    pub fn filter(&self, query: &str) -> Vec<RowMatch<'_>> {
        self.table.filter(query)
    }

    /// Update the pending annotation column name.
    pub fn set_column_name(&mut self, name: &str) -> bool {
        self.controller.set_column_name(name)
    }

    /// Commit the pending column into the working table.
    pub fn commit_column(&mut self) -> bool {
        self.controller.commit_column(&mut self.table)
    }

    /// Select a data row by original index.
    ///
    /// Rejected when the index is outside the working table, so a later
    /// apply never targets a nonexistent row.
    pub fn select_row(&mut self, index: usize) -> bool {
        if index >= self.table.row_count() {
            return false;
        }
        self.controller.select_row(index);
        true
    }

    /// Drop the current row selection.
    pub fn clear_selection(&mut self) {
        self.controller.clear_selection();
    }

    /// Buffer a decoded value (latest decode wins).
    pub fn set_scanned_value(&mut self, value: &str) {
        self.controller.set_scanned_value(value);
    }

    /// Whether an apply would currently be accepted.
    pub fn can_apply(&self) -> bool {
        self.controller.can_apply()
    }

    /// Apply the buffered scanned value to the selected row.
    pub fn apply_scanned_value(&mut self) -> bool {
        self.controller.apply_scanned_value(&mut self.table)
    }

    /// Write the working grid back to the catalog.
    ///
    /// Returns whether the record still existed; a record deleted
    /// elsewhere makes this a silent no-op, matching the catalog contract.
    pub fn sync<S: ByteStore>(&self, catalog: &Catalog<S>) -> Result<bool> {
        let grid = self.table.to_grid();
        catalog.update(&self.record_id, move |_| grid)
    }

    /// Deselect the dataset, discarding session state.
    ///
    /// Catalog state already written stays untouched.
    pub fn deselect(self) {}

    /// File name for an export of this session's table.
    ///
    /// The suffix goes before the extension (`inventory.csv` becomes
    /// `inventory_annotated.csv`); a session without a display name falls
    /// back to a fixed default.
    pub fn export_file_name(&self) -> String {
        if self.display_name.is_empty() {
            return FALLBACK_EXPORT_NAME.to_string();
        }

        match self.display_name.rfind('.') {
            Some(dot) => format!(
                "{}{}.{}",
                &self.display_name[..dot],
                EXPORT_SUFFIX,
                &self.display_name[dot + 1..]
            ),
            None => format!("{}{}.{}", self.display_name, EXPORT_SUFFIX, DEFAULT_EXTENSION),
        }
    }

    /// Serialize the working grid for download.
    pub fn export_bytes(&self) -> Result<Vec<u8>> {
        serialize_grid(&self.table.to_grid(), b',')
    }
}
