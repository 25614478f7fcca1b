//! Packfold CLI binary
//!
//! Minimal entrypoint for the packfold CLI. All manifest handling lives
//! in the library crate so other tools can embed it.

use clap::Parser;

use packfold::cli::{Cli, Commands};
use packfold::commands;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args),
        Commands::Fmt(args) => commands::fmt::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
