//! Settings for the concordance tool

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Corpus file; the bundled sample is used when unset
    pub corpus: Option<PathBuf>,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            corpus: None,
            pretty: true,
        }
    }

    /// Read settings from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
