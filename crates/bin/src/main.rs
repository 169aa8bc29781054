use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("reorder=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.resolve()?;
    tracing::debug!(?config, "Resolved reorder config");
    let format = cli.format.into();

    match &cli.command {
        Commands::Sort(args) => commands::sort::run(args, format),
        Commands::Move(args) => commands::moves::run(args, &config, format),
        Commands::Check(args) => commands::moves::check(args, &config, format),
        Commands::Apply(args) => commands::apply::run(args, format),
        Commands::Diff(args) => commands::diff::run(args, format),
    }
}
