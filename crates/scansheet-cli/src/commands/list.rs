//! List command - show the stored file history.

use std::path::PathBuf;

use colored::Colorize;

use super::open_catalog;

pub fn run(store: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(&store);
    let records = catalog.list();

    if json {
        let entries: Vec<serde_json::Value> = records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id,
                    "display_name": r.display_name,
                    "media_type": r.media_type,
                    "size_hint": r.size_hint,
                    "created_at": r.created_at,
                    "updated_at": r.updated_at,
                    "rows": r.row_count(),
                    "columns": r.column_count(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No datasets here. Import a file to start annotating.");
        return Ok(());
    }

    // Pad before coloring so escape codes don't skew the columns
    let header = format!(
        "{:<22} {:<26} {:<8} {:<10} {:<17} {:<17}",
        "ID", "Name", "Type", "Size", "Created", "Modified"
    );
    println!("{}", header.bold());

    for record in &records {
        let kind = record
            .media_type
            .rsplit('/')
            .next()
            .unwrap_or(&record.media_type);

        println!(
            "{:<22} {:<26} {:<8} {:<10} {:<17} {:<17}",
            record.id,
            record.display_name,
            kind,
            record.size_hint.as_deref().unwrap_or("N/A"),
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.updated_at.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
