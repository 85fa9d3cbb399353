mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives when present and valid, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    if let Commands::Version = cli.command {
        return commands::version::run();
    }

    let loaded = commands::load(cli.corpus.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Commands::Index => commands::index::run(&loaded),
        Commands::Search { terms, json } => commands::search::run(&loaded, terms, json),
        Commands::Stats => commands::stats::run(&loaded),
        Commands::Version => commands::version::run(),
    }
}
