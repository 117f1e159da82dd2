//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scansheet: annotate tabular datasets with scanned codes
#[derive(Parser)]
#[command(name = "scansheet")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the dataset store
    #[arg(long, global = true, default_value = ".scansheet")]
    pub store: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a delimited file into the catalog
    Import {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE", required_unless_present = "sample")]
        file: Option<PathBuf>,

        /// Import the built-in sample dataset instead of a file
        #[arg(long)]
        sample: bool,
    },

    /// List stored datasets, most recent first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a stored dataset's metadata and a row preview
    Show {
        /// Dataset id
        #[arg(value_name = "ID")]
        id: String,

        /// Number of rows to preview
        #[arg(short, long, default_value = "10")]
        rows: usize,

        /// Output the full record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a dataset from the catalog
    Remove {
        /// Dataset id
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Rename a dataset (collision-safe)
    Rename {
        /// Dataset id
        #[arg(value_name = "ID")]
        id: String,

        /// Desired display name
        #[arg(value_name = "NEW_NAME")]
        new_name: String,
    },

    /// Export a dataset's current grid to a delimited file
    Export {
        /// Dataset id
        #[arg(value_name = "ID")]
        id: String,

        /// Output path (default: <name>_annotated.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run an interactive annotation session over a dataset
    Annotate {
        /// Dataset id
        #[arg(value_name = "ID")]
        id: String,

        /// Name of the annotation column to insert
        #[arg(short, long)]
        column: String,

        /// Initial search query to narrow the row listing
        #[arg(long)]
        find: Option<String>,
    },
}
