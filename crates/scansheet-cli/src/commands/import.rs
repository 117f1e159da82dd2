//! Import command - parse a delimited file and store it in the catalog.

use std::path::PathBuf;

use colored::Colorize;
use scansheet::Parser;
use scansheet::input::{SAMPLE_NAME, sample_grid};

use super::open_catalog;

pub fn run(
    store: PathBuf,
    file: Option<PathBuf>,
    sample: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(&store);

    let record = if sample {
        catalog.create(SAMPLE_NAME, "text/csv", sample_grid())?
    } else {
        let file = file.ok_or("A file path is required unless --sample is given")?;
        let parsed = Parser::new().parse_file(&file)?;

        let name = file
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file.csv".to_string());

        catalog.create_with_size(&name, &parsed.media_type, parsed.grid, &parsed.size_hint)?
    };

    println!(
        "{} {} ({} rows x {} columns)",
        "Imported".green().bold(),
        record.display_name.white().bold(),
        record.row_count(),
        record.column_count()
    );
    println!("  id: {}", record.id.cyan());

    Ok(())
}
