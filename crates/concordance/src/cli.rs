use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "concordance")]
#[command(version)]
#[command(about = "Word concordance and sentence lookup")]
pub struct Cli {
    /// Corpus file (plain text, one sentence per line, or a JSON array)
    #[arg(short, long, global = true)]
    pub corpus: Option<PathBuf>,

    /// JSON settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the concordance as JSON
    Index,

    /// Print sentences containing any of the terms
    Search {
        /// Search terms, matched case-insensitively
        #[arg(required = true)]
        terms: Vec<String>,

        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show corpus and concordance sizes
    Stats,

    /// Print version information
    Version,
}
