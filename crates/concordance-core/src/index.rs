//! Word concordance built from an ordered sequence of sentences

use crate::error::ConcordanceError;
use crate::tokenizer;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Maps each word to the ascending positions of the sentences containing it.
///
/// Keys exist only for words that occur somewhere, so no list is ever empty.
/// Deserializing enforces the same shape `build` produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Concordance {
    entries: BTreeMap<String, Vec<usize>>,
}

impl Concordance {
    /// Index every sentence by its position.
    pub fn build<S: AsRef<str>>(sentences: &[S]) -> Self {
        let mut entries: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (position, sentence) in sentences.iter().enumerate() {
            // One entry per word per sentence
            let unique: HashSet<String> = tokenizer::words(sentence.as_ref()).collect();
            for word in unique {
                entries.entry(word).or_default().push(position);
            }
        }

        tracing::debug!(
            sentences = sentences.len(),
            words = entries.len(),
            "built concordance"
        );

        Self { entries }
    }

    /// Positions for an already-normalized word.
    pub fn get(&self, word: &str) -> Option<&[usize]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Positions for a raw search term, lower-cased before lookup.
    pub fn lookup(&self, term: &str) -> Option<&[usize]> {
        self.get(&term.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words in ascending order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(word, positions)| (word.as_str(), positions.as_slice()))
    }
}

impl TryFrom<BTreeMap<String, Vec<usize>>> for Concordance {
    type Error = ConcordanceError;

    fn try_from(entries: BTreeMap<String, Vec<usize>>) -> Result<Self, Self::Error> {
        for (word, positions) in &entries {
            if positions.is_empty() {
                return Err(ConcordanceError::EmptyPositions { word: word.clone() });
            }
            if !positions.windows(2).all(|pair| pair[0] < pair[1]) {
                return Err(ConcordanceError::UnorderedPositions { word: word.clone() });
            }
        }
        Ok(Self { entries })
    }
}

impl<'de> Deserialize<'de> for Concordance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<String, Vec<usize>>::deserialize(deserializer)?;
        Self::try_from(entries).map_err(serde::de::Error::custom)
    }
}
