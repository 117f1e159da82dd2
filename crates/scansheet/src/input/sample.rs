//! Built-in sample dataset for trying the tool without a source file.

use once_cell::sync::Lazy;

/// Display name the sample dataset is imported under.
pub const SAMPLE_NAME: &str = "test_data.csv";

static SAMPLE: Lazy<Vec<Vec<String>>> = Lazy::new(|| {
    let raw: &[&[&str]] = &[
        &["product_id", "product_name", "type", "available"],
        &["1", "Smartphone", "Electronics", "Yes"],
        &["2", "Laptop", "Electronics", "Yes"],
        &["3", "Refrigerator", "Appliance", "No"],
        &["4", "Washing Machine", "Appliance", "Yes"],
        &["5", "Microwave", "Appliance", "No"],
        &["6", "Headphones", "Electronics", "Yes"],
        &["7", "Keyboard", "Electronics", "Yes"],
        &["8", "Television", "Electronics", "No"],
        &["9", "Blender", "Appliance", "Yes"],
        &["10", "Toaster", "Appliance", "Yes"],
        &["11", "Camera", "Electronics", "No"],
        &["12", "Smartwatch", "Electronics", "Yes"],
        &["13", "Vacuum Cleaner", "Appliance", "Yes"],
        &["14", "Air Conditioner", "Appliance", "No"],
        &["15", "Tablet", "Electronics", "Yes"],
        &["16", "Gaming Console", "Electronics", "Yes"],
        &["17", "Electric Kettle", "Appliance", "Yes"],
        &["18", "Hair Dryer", "Appliance", "No"],
        &["19", "Printer", "Electronics", "Yes"],
        &["20", "Router", "Electronics", "Yes"],
    ];

    raw.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
});

/// A copy of the sample grid, row 0 being the header.
pub fn sample_grid() -> Vec<Vec<String>> {
    SAMPLE.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_rectangular() {
        let grid = sample_grid();
        let width = grid[0].len();

        assert!(grid.len() > 1);
        assert!(grid.iter().all(|row| row.len() == width));
    }
}
