mod bootstrap;
mod cli;
mod commands;
mod interactive;
mod render;
mod wiring;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GEMINI_API_KEY and friends from a local .env if present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    bootstrap::init_tracing()?;

    let deps = wiring::build_deps(cli.config.as_deref(), cli.data_dir.clone())?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => interactive::run(deps).await,
        Command::Report {
            image,
            include,
            exclude,
            pay,
        } => commands::report(deps, &image, include, exclude, pay).await,
        Command::Admin => interactive::admin(&deps).await,
    }
}
