//! Rename command - change a dataset's display name, collision-safe.

use std::path::PathBuf;

use colored::Colorize;

use super::{open_catalog, require_record};

pub fn run(
    store: PathBuf,
    id: String,
    new_name: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(&store);
    let record = require_record(&catalog, &id)?;

    let resolved = catalog
        .rename(&record.id, &new_name)?
        .ok_or("Dataset disappeared during rename")?;

    if resolved != new_name {
        println!(
            "{} '{}' was taken, stored as {}",
            "Renamed:".yellow().bold(),
            new_name,
            resolved.white().bold()
        );
    } else {
        println!(
            "{} {} -> {}",
            "Renamed".green().bold(),
            record.display_name,
            resolved.white().bold()
        );
    }

    Ok(())
}
