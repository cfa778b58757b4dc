//! blocklist-gen CLI
//!
//! Renders curated blocklist sources into hosts, uBlacklist, and
//! uBlock Origin outputs, and alphabetizes list files in place.

mod cli;
mod commands;
mod error;
mod formats;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Warnings must always reach the console; verbose adds debug detail.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(cli.verbose)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    match cli.command {
        Some(Commands::Generate(args)) => commands::run_generate(&args),
        Some(Commands::Sort { file }) => commands::run_sort(&file),
        None => {
            println!("{} Blocklist generator", "blocklist-gen".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "blocklist-gen --help".cyan()
            );
            Ok(())
        }
    }
}
