//! Error types for the concordance library

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermListError {
    /// The list is non-empty and no node accepted the insertion predicate.
    #[error("no node matched the insertion predicate")]
    NoMatch,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConcordanceError {
    #[error("word '{word}' has no sentence positions")]
    EmptyPositions { word: String },

    #[error("positions for word '{word}' are not strictly ascending")]
    UnorderedPositions { word: String },
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus {} is not a JSON array of strings: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
