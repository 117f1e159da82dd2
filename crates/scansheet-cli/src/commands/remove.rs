//! Remove command - delete a dataset from the catalog.

use std::path::PathBuf;

use colored::Colorize;

use super::{open_catalog, require_record};

pub fn run(store: PathBuf, id: String) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(&store);
    let record = require_record(&catalog, &id)?;

    catalog.remove(&record.id)?;

    println!("{} {}", "Removed".red().bold(), record.display_name);
    Ok(())
}
