//! Filtered, order-preserving view over table rows.

use super::Table;

/// A data row included in a filtered view.
///
/// `original_index` is the zero-based index into the table's data rows,
/// stable regardless of filtering; it is the index to hand back to
/// [`Table::patch_cell`] or [`Table::apply_annotation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMatch<'a> {
    /// The matched row's cells.
    pub cells: &'a [String],
    /// Index of this row among the table's data rows.
    pub original_index: usize,
}

impl Table {
    /// Derive the rows matching a free-text query.
    ///
    /// A row is included iff any cell contains `query` as a
    /// case-insensitive substring; an empty query includes every row.
    /// The header is never part of the view. Pure read-side projection,
    /// recomputed on every call.
    pub fn filter(&self, query: &str) -> Vec<RowMatch<'_>> {
        let needle = query.to_lowercase();

        (0..self.row_count())
            .filter_map(|index| {
                let cells = self.row(index)?;
                let hit = needle.is_empty()
                    || cells.iter().any(|cell| cell.to_lowercase().contains(&needle));
                hit.then_some(RowMatch {
                    cells,
                    original_index: index,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::from_grid(
            [
                ["id", "name", "kind"],
                ["1", "Smartphone", "Electronics"],
                ["2", "Blender", "Appliance"],
                ["3", "Laptop", "Electronics"],
            ]
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_query_includes_all_rows() {
        let table = sample_table();
        let view = table.filter("");

        assert_eq!(view.len(), 3);
        assert_eq!(view[0].original_index, 0);
        assert_eq!(view[2].original_index, 2);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let table = sample_table();
        let view = table.filter("eLeCtRo");

        assert_eq!(view.len(), 2);
        assert_eq!(view[0].cells[1], "Smartphone");
        assert_eq!(view[1].cells[1], "Laptop");
    }

    #[test]
    fn test_filter_skips_header() {
        let table = sample_table();

        // "kind" only appears in the header row
        assert!(table.filter("kind").is_empty());
    }

    #[test]
    fn test_original_index_survives_filtering() {
        let table = sample_table();
        let view = table.filter("Laptop");

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].original_index, 2);
    }

    #[test]
    fn test_filter_preserves_row_order() {
        let table = sample_table();
        let indexes: Vec<usize> = table
            .filter("e")
            .iter()
            .map(|m| m.original_index)
            .collect();

        let mut sorted = indexes.clone();
        sorted.sort_unstable();
        assert_eq!(indexes, sorted);
    }
}
