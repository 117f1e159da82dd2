//! Annotation state machine.
//!
//! Ties a pending column name, a buffered scanned value, and a selected
//! row into one atomic "apply annotation" transition. Every guard here is
//! a validated precondition, not an exception: a disabled transition is a
//! no-op observable only via unchanged state.

use crate::table::Table;

/// State of the session's annotation column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnState {
    /// No annotation column named yet.
    Unset,
    /// A name has been entered but the column is not in the table yet.
    Pending(String),
    /// The column is inserted; a dataset supports exactly one per session.
    Committed(String),
}

impl ColumnState {
    /// The column name, pending or committed.
    pub fn name(&self) -> Option<&str> {
        match self {
            ColumnState::Unset => None,
            ColumnState::Pending(name) | ColumnState::Committed(name) => Some(name),
        }
    }

    /// Whether the column has been inserted into the table.
    pub fn is_committed(&self) -> bool {
        matches!(self, ColumnState::Committed(_))
    }
}

/// Session-only annotation state. Not persisted; discarded on deselect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationController {
    column: ColumnState,
    selected_row: Option<usize>,
    scanned_value: String,
}

impl AnnotationController {
    /// Fresh machine: no column, no selection, no buffered value.
    pub fn new() -> Self {
        Self {
            column: ColumnState::Unset,
            selected_row: None,
            scanned_value: String::new(),
        }
    }

    /// Current column state.
    pub fn column(&self) -> &ColumnState {
        &self.column
    }

    /// Currently selected data-row index, if any.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    /// The buffered scanned value.
    pub fn scanned_value(&self) -> &str {
        &self.scanned_value
    }

    /// Update the pending column name.
    ///
    /// Rejected once the column is committed; an empty name clears the
    /// pending state.
    pub fn set_column_name(&mut self, name: &str) -> bool {
        if self.column.is_committed() {
            return false;
        }

        self.column = if name.is_empty() {
            ColumnState::Unset
        } else {
            ColumnState::Pending(name.to_string())
        };
        true
    }

    /// Insert the pending column into the table and lock it in.
    ///
    /// Requires a non-empty pending name; a second commit is rejected.
    pub fn commit_column(&mut self, table: &mut Table) -> bool {
        let ColumnState::Pending(name) = &self.column else {
            return false;
        };

        if !table.insert_column(name) {
            return false;
        }

        self.column = ColumnState::Committed(name.clone());
        true
    }

    /// Select a data row by its original index. Independent of column state.
    pub fn select_row(&mut self, index: usize) {
        self.selected_row = Some(index);
    }

    /// Drop the current row selection.
    pub fn clear_selection(&mut self) {
        self.selected_row = None;
    }

    /// Buffer a decoded value; later decodes overwrite earlier ones until
    /// the value is consumed by an apply.
    pub fn set_scanned_value(&mut self, value: &str) {
        self.scanned_value = value.to_string();
    }

    /// Whether an apply would currently be accepted.
    pub fn can_apply(&self) -> bool {
        self.column.is_committed() && self.selected_row.is_some() && !self.scanned_value.is_empty()
    }

    /// Write the buffered value into the selected row's annotation cell.
    ///
    /// Enabled only when the column is committed, a row is selected, and
    /// the value is non-empty. On success the value is consumed and the
    /// selection cleared, forcing re-selection before the next apply.
    pub fn apply_scanned_value(&mut self, table: &mut Table) -> bool {
        if !self.can_apply() {
            return false;
        }

        let Some(row) = self.selected_row else {
            return false;
        };
        if !table.apply_annotation(row, &self.scanned_value) {
            return false;
        }

        self.scanned_value.clear();
        self.selected_row = None;
        true
    }

    /// Reset the whole machine, discarding pending name, value, selection.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for AnnotationController {
    fn default() -> Self {
        Self::new()
    }
}
