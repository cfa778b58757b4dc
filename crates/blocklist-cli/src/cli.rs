//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Blocklist generator - render curated domain lists into blocking formats
#[derive(Parser, Debug)]
#[command(name = "blocklist-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate every enabled output format into the export folder
    ///
    /// Reads the Common, SubPages, Nuclear, and Elements list folders,
    /// renders them into hosts, uBlacklist, and uBlock Origin formats,
    /// and compiles the per-engine outputs into merged artifacts.
    Generate(GenerateArgs),

    /// Alphabetize one list file
    ///
    /// Sorts every block's body lines and writes the result next to
    /// the input as `sorted_<name>`. Domains are not expanded on this
    /// path, so directive-bearing blocks keep one line per entry.
    Sort {
        /// The list file to sort
        file: PathBuf,
    },
}

/// Options for the generate command.
///
/// Every format is enabled by default; the `--no-*` flags opt out.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Disable all hosts file creation, including compilation
    #[arg(long)]
    pub no_hosts: bool,

    /// Don't compile the hosts formats together
    #[arg(long)]
    pub no_compile_hosts: bool,

    /// Don't create the uBlacklist format
    #[arg(long)]
    pub no_ublacklist: bool,

    /// Disable all uBlock Origin file creation, including compilation
    #[arg(long, visible_alias = "no-ubo", alias = "no-ublock")]
    pub no_ublockorigin: bool,

    /// Don't compile the uBlock Origin formats together
    #[arg(long, visible_alias = "no-compile-ubo", alias = "no-compile-ublock")]
    pub no_compile_ublockorigin: bool,

    /// Don't create the nuclear-option variants
    #[arg(long)]
    pub no_nuclear: bool,

    /// Folder containing the common lists
    #[arg(long, default_value = "Common")]
    pub common_path: PathBuf,

    /// Folder containing the subpage lists
    #[arg(long, default_value = "SubPages")]
    pub subpage_path: PathBuf,

    /// Folder containing the nuclear option lists
    #[arg(long, default_value = "Nuclear")]
    pub nuclear_path: PathBuf,

    /// Folder with extra elements appended to the uBlock Origin lists
    #[arg(long, default_value = "Elements")]
    pub element_path: PathBuf,

    /// The folder to write the compiled and formatted files to
    #[arg(short, long, default_value = "Export")]
    pub output_folder: PathBuf,

    /// Don't overwrite existing files in the export directory
    #[arg(long)]
    pub no_overwrite: bool,
}
