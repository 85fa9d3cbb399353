//! Loading sentence sequences from disk

use crate::error::CorpusError;
use std::path::Path;

const SAMPLE_TEXT: &str = include_str!("../data/declaration.txt");

/// An ordered, immutable sequence of sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    sentences: Vec<String>,
}

impl Corpus {
    /// Title of the bundled text behind [`Corpus::sample`].
    pub const SAMPLE_TITLE: &'static str = "Declaration of Independence (opening passage)";

    pub fn new(sentences: Vec<String>) -> Self {
        Self { sentences }
    }

    /// One sentence per non-blank line.
    pub fn from_text(text: &str) -> Self {
        let sentences = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        Self { sentences }
    }

    /// Read a corpus file. `.json` files hold an array of strings, anything
    /// else is treated as plain text.
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let corpus = if is_json {
            let sentences: Vec<String> =
                serde_json::from_str(&contents).map_err(|source| CorpusError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            Self::new(sentences)
        } else {
            Self::from_text(&contents)
        };

        tracing::debug!(path = %path.display(), sentences = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    /// Opening passage of the Declaration of Independence, one sentence per line.
    pub fn sample() -> Self {
        Self::from_text(SAMPLE_TEXT)
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_text_skips_blank_lines() {
        let corpus = Corpus::from_text("first line\n\n   \nsecond line\n");
        assert_eq!(corpus.sentences(), ["first line", "second line"]);
    }

    #[test]
    fn test_from_path_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "the cat sat\r\nthe dog ran\n").unwrap();

        let corpus = Corpus::from_path(&path).unwrap();
        assert_eq!(corpus.sentences(), ["the cat sat", "the dog ran"]);
    }

    #[test]
    fn test_from_path_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.JSON");
        std::fs::write(&path, r#"["a b", "", "c"]"#).unwrap();

        let corpus = Corpus::from_path(&path).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.sentences()[1], "");
    }

    #[test]
    fn test_from_path_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let err = Corpus::from_path(&path).unwrap_err();
        assert!(matches!(err, CorpusError::Json { .. }));
    }

    #[test]
    fn test_from_path_missing() {
        let dir = TempDir::new().unwrap();
        let err = Corpus::from_path(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_sample_is_not_empty() {
        let corpus = Corpus::sample();
        assert!(!corpus.is_empty());
        assert!(corpus.sentences()[0].starts_with("When in the Course"));
    }
}
