use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Photo-based novelty ancestry reports in the terminal.
#[derive(Debug, Parser)]
#[command(name = "ancestrylens", version, about)]
pub struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir)
    #[arg(long, env = "ANCESTRYLENS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory for persisted usage counters (defaults to the platform
    /// data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk through the interactive five-step flow (default)
    Run,

    /// Generate one report without the interactive flow
    Report {
        /// Image file to analyze (PNG, JPEG, or WebP)
        #[arg(long)]
        image: PathBuf,

        /// Regions to prioritize, comma separated
        #[arg(long, value_delimiter = ',')]
        include: Vec<String>,

        /// Regions to exclude from the whole report, comma separated
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Complete the simulated payment automatically when no uses remain
        #[arg(long)]
        pay: bool,
    },

    /// Open the admin login and earnings dashboard
    Admin,
}
