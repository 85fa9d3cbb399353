pub mod index;
pub mod search;
pub mod stats;
pub mod version;

use anyhow::Context;
use concordance_core::{Concordance, Config, Corpus};
use std::path::Path;

/// Corpus and concordance resolved from the command line and settings file.
pub struct Loaded {
    pub config: Config,
    pub corpus: Corpus,
    pub concordance: Concordance,
}

/// `--corpus` wins over the settings file; with neither, the bundled sample is used.
pub fn load(corpus: Option<&Path>, config: Option<&Path>) -> anyhow::Result<Loaded> {
    let mut config = match config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(path) = corpus {
        config.corpus = Some(path.to_path_buf());
    }

    let corpus = match &config.corpus {
        Some(path) => Corpus::from_path(path)
            .with_context(|| format!("loading corpus from {}", path.display()))?,
        None => {
            tracing::debug!("no corpus configured, using bundled sample");
            Corpus::sample()
        }
    };

    let concordance = Concordance::build(corpus.sentences());
    Ok(Loaded {
        config,
        corpus,
        concordance,
    })
}

pub fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
