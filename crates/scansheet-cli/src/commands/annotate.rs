//! Annotate command - interactive scan-select-apply session.
//!
//! Input lines are routed through the decode stream: a line starting with
//! `/` is a session command, any other line is treated as a decoded code
//! value. An annotation is applied as soon as a row is selected and a
//! code is buffered, and every accepted mutation is synced back to the
//! catalog.

use std::io::{self, BufReader};
use std::path::PathBuf;

use colored::Colorize;
use scansheet::{Catalog, FileStore, LineSource, Scanner, Session};

use super::{open_catalog, require_record};

pub fn run(
    store: PathBuf,
    id: String,
    column: String,
    find: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(&store);
    let record = require_record(&catalog, &id)?;

    let mut session = Session::open(&record)?;
    if !session.set_column_name(&column) || !session.commit_column() {
        return Err("Annotation column name must be non-empty".into());
    }
    session.sync(&catalog)?;

    println!(
        "{} {} (annotation column: {})",
        "Annotating".cyan().bold(),
        session.display_name().white().bold(),
        column.white().bold()
    );

    let mut query = find.unwrap_or_default();
    print_rows(&session, &query);
    print_help();

    let mut scanner = Scanner::new();
    scanner.start(LineSource::new(BufReader::new(io::stdin())));

    let mut applied = 0usize;
    while let Some(event) = scanner.next_event() {
        if let Some(command) = event.strip_prefix('/') {
            let mut parts = command.splitn(2, ' ');
            match (parts.next().unwrap_or(""), parts.next()) {
                ("done", _) => break,

                ("rows", _) => print_rows(&session, &query),

                ("find", arg) => {
                    query = arg.unwrap_or("").trim().to_string();
                    print_rows(&session, &query);
                }

                ("row", Some(arg)) => match arg.trim().parse::<usize>() {
                    Ok(n) if n >= 1 && session.select_row(n - 1) => {
                        println!("Selected row {}", n.to_string().white().bold());
                        applied += try_apply(&mut session, &catalog)?;
                    }
                    _ => println!("{} No row '{}'", "!".yellow().bold(), arg.trim()),
                },

                _ => print_help(),
            }
            continue;
        }

        // Any other line is a decoded code; the latest one wins
        session.set_scanned_value(&event);
        println!("Scanned code: {}", event.white().bold());

        if session.controller().selected_row().is_none() {
            println!("  buffered; select a target with /row N");
        }
        applied += try_apply(&mut session, &catalog)?;
    }

    scanner.stop();

    println!(
        "{} {} annotation(s) applied to {}",
        "Done:".green().bold(),
        applied,
        session.display_name()
    );
    session.deselect();

    Ok(())
}

/// Apply the buffered value if the machine allows it, then sync.
fn try_apply(
    session: &mut Session,
    catalog: &Catalog<FileStore>,
) -> Result<usize, Box<dyn std::error::Error>> {
    let Some(target) = session.controller().selected_row() else {
        return Ok(0);
    };

    if !session.apply_scanned_value() {
        return Ok(0);
    }

    if !session.sync(catalog)? {
        eprintln!(
            "{} Dataset was deleted from the catalog; edits are no longer persisted",
            "Warning:".yellow().bold()
        );
    }

    println!("  {} row {}", "Applied to".green(), target + 1);
    Ok(1)
}

/// Print the (filtered) row listing the way the table view shows it.
fn print_rows(session: &Session, query: &str) {
    let matches = session.filter(query);

    if !query.is_empty() {
        println!("Rows matching '{}':", query);
    }

    println!("  {:>4}  {}", "#", session.table().header().join(" | ").bold());
    for m in &matches {
        println!("  {:>4}  {}", m.original_index + 1, m.cells.join(" | "));
    }
    if matches.is_empty() {
        println!("  (no rows)");
    }
}

fn print_help() {
    println!(
        "Scan or type a code to buffer it. Commands: {}",
        "/row N, /find QUERY, /rows, /done".cyan()
    );
}
