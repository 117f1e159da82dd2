//! Show command - preview a stored dataset.

use std::path::PathBuf;

use colored::Colorize;

use super::{open_catalog, require_record};

pub fn run(
    store: PathBuf,
    id: String,
    rows: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(&store);
    let record = require_record(&catalog, &id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows x {} columns, {})",
        "Dataset".cyan().bold(),
        record.display_name.white().bold(),
        record.row_count(),
        record.column_count(),
        record.media_type
    );

    if let Some(header) = record.data.first() {
        println!("  {}", header.join(" | ").bold());
    }
    for row in record.data.iter().skip(1).take(rows) {
        println!("  {}", row.join(" | "));
    }
    if record.row_count() > rows {
        println!("  ... {} more rows", record.row_count() - rows);
    }

    Ok(())
}
