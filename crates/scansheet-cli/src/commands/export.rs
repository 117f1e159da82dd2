//! Export command - write the current grid to a delimited file.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use scansheet::Session;

use super::{open_catalog, require_record};

pub fn run(
    store: PathBuf,
    id: String,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(&store);
    let record = require_record(&catalog, &id)?;

    let session = Session::open(&record)?;
    let path = output.unwrap_or_else(|| PathBuf::from(session.export_file_name()));
    let bytes = session.export_bytes()?;

    fs::write(&path, bytes)?;

    println!(
        "{} {} ({} rows) to {}",
        "Exported".green().bold(),
        record.display_name,
        record.row_count(),
        path.display().to_string().white().bold()
    );

    Ok(())
}
