//! In-memory dataset model.
//!
//! A [`Table`] is the active working dataset: a header plus data rows,
//! rectangular at all times. Mutations that change the column count apply
//! to every row atomically; data row *i* keeps its identity through any
//! filtered view of the table.
//!
//! Expected misuse (empty column name, out-of-range index) is a rejected
//! no-op, observable only as unchanged state. The `bool` return value of
//! each mutation reports whether it was accepted.

mod view;

pub use view::RowMatch;

use crate::error::{Result, ScansheetError};

/// The active working dataset, owned by one editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from a full grid, row 0 being the header.
    ///
    /// Data rows are padded or truncated to the header width so the
    /// rectangularity invariant holds from the start.
    pub fn from_grid(grid: Vec<Vec<String>>) -> Result<Self> {
        let mut iter = grid.into_iter();
        let header = iter
            .next()
            .ok_or_else(|| ScansheetError::EmptyData("Grid has no header row".to_string()))?;

        if header.is_empty() {
            return Err(ScansheetError::EmptyData("Header row has no cells".to_string()));
        }

        let width = header.len();
        let rows = iter
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Ok(Self { header, rows })
    }

    /// The full grid snapshot: header followed by data rows.
    ///
    /// This is the shape persisted in a dataset record and fed to the
    /// serializer on export.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(self.header.clone());
        grid.extend(self.rows.iter().cloned());
        grid
    }

    /// The header row.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// A data row by original index.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// A specific cell value by original row index and column index.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Prepend a column: `name` goes to the front of the header, an empty
    /// cell to the front of every data row.
    ///
    /// Rejected for an empty name. There is no remove-column; repeated
    /// calls are cumulative.
    pub fn insert_column(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }

        self.header.insert(0, name.to_string());
        for row in &mut self.rows {
            row.insert(0, String::new());
        }
        true
    }

    /// Replace exactly one cell, leaving the rest untouched.
    ///
    /// `row` is the original data-row index. Callers are expected to have
    /// validated the target first; an out-of-range index is rejected.
    pub fn patch_cell(&mut self, row: usize, col: usize, value: &str) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Write an annotation value into a row.
    ///
    /// The annotation column is always inserted at position 0, so this
    /// patches the leftmost cell of the target row.
    pub fn apply_annotation(&mut self, row: usize, value: &str) -> bool {
        self.patch_cell(row, 0, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cells: &[&[&str]]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn sample_table() -> Table {
        Table::from_grid(grid(&[
            &["h1", "h2"],
            &["x", "y"],
            &["p", "q"],
        ]))
        .unwrap()
    }

    #[test]
    fn test_from_grid_splits_header() {
        let table = sample_table();

        assert_eq!(table.header(), &["h1", "h2"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("x"));
    }

    #[test]
    fn test_from_grid_rejects_empty() {
        assert!(Table::from_grid(Vec::new()).is_err());
    }

    #[test]
    fn test_from_grid_pads_ragged_rows() {
        let table = Table::from_grid(grid(&[&["a", "b", "c"], &["1"]])).unwrap();

        assert_eq!(table.row(0).unwrap(), &["1", "", ""]);
    }

    #[test]
    fn test_to_grid_round_trip() {
        let original = grid(&[&["h1", "h2"], &["x", "y"]]);
        let table = Table::from_grid(original.clone()).unwrap();

        assert_eq!(table.to_grid(), original);
    }

    #[test]
    fn test_insert_column_grows_every_row() {
        let mut table = sample_table();
        assert!(table.insert_column("code"));

        assert_eq!(table.header(), &["code", "h1", "h2"]);
        assert_eq!(table.row(0).unwrap(), &["", "x", "y"]);
        assert_eq!(table.row(1).unwrap(), &["", "p", "q"]);
    }

    #[test]
    fn test_insert_column_rejects_empty_name() {
        let mut table = sample_table();
        let before = table.clone();

        assert!(!table.insert_column(""));
        assert_eq!(table, before);
    }

    #[test]
    fn test_insert_column_is_cumulative() {
        let mut table = sample_table();
        table.insert_column("a");
        table.insert_column("b");

        assert_eq!(table.header(), &["b", "a", "h1", "h2"]);
        assert_eq!(table.column_count(), 4);
    }

    #[test]
    fn test_patch_cell_replaces_one_cell() {
        let mut table = sample_table();
        assert!(table.patch_cell(1, 0, "new"));

        assert_eq!(table.get(1, 0), Some("new"));
        assert_eq!(table.get(0, 0), Some("x"));
        assert_eq!(table.get(1, 1), Some("q"));
    }

    #[test]
    fn test_patch_cell_out_of_range_is_rejected() {
        let mut table = sample_table();
        let before = table.clone();

        assert!(!table.patch_cell(5, 0, "new"));
        assert!(!table.patch_cell(0, 9, "new"));
        assert_eq!(table, before);
    }

    #[test]
    fn test_apply_annotation_targets_leftmost_column() {
        let mut table = sample_table();
        table.insert_column("code");
        assert!(table.apply_annotation(0, "8901234"));

        assert_eq!(table.row(0).unwrap(), &["8901234", "x", "y"]);
    }
}
