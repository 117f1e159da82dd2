//! Scansheet CLI - annotate tabular datasets with scanned codes.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import { file, sample } => commands::import::run(cli.store, file, sample),

        Commands::List { json } => commands::list::run(cli.store, json),

        Commands::Show { id, rows, json } => commands::show::run(cli.store, id, rows, json),

        Commands::Remove { id } => commands::remove::run(cli.store, id),

        Commands::Rename { id, new_name } => commands::rename::run(cli.store, id, new_name),

        Commands::Export { id, output } => commands::export::run(cli.store, id, output),

        Commands::Annotate { id, column, find } => {
            commands::annotate::run(cli.store, id, column, find)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
