//! Query engine: walks search terms against a concordance

use crate::index::Concordance;
use crate::term_list::TermList;
use std::collections::HashSet;

/// Return every sentence containing any of `terms`, in term order.
///
/// Within a term, sentences come back in ascending position. A sentence
/// already emitted for an earlier term is not repeated; duplicates are
/// detected by text, so identical sentences at different positions count
/// once.
///
/// A term missing from the concordance discards the whole result, including
/// matches gathered for earlier terms. Callers cannot tell that case apart
/// from an empty term list or a search that matched nothing.
pub fn search<T, S>(
    terms: &TermList<T>,
    concordance: &Concordance,
    sentences: &[S],
) -> Vec<String>
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for term in terms {
        let term: &str = term.as_ref();
        let Some(positions) = concordance.lookup(term) else {
            // Any unknown term empties the whole result
            tracing::debug!(term, "term not in concordance, discarding results");
            return Vec::new();
        };

        for &position in positions {
            let Some(sentence) = sentences.get(position) else {
                tracing::debug!(position, "concordance position has no sentence");
                continue;
            };
            let sentence: &str = sentence.as_ref();
            if seen.insert(sentence) {
                results.push(sentence);
            }
        }
    }

    tracing::debug!(terms = terms.len(), matches = results.len(), "search finished");
    results.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(values: &[&str]) -> TermList<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_terms() {
        let sentences = ["the cat sat"];
        let concordance = Concordance::build(&sentences);
        assert!(search(&terms(&[]), &concordance, &sentences).is_empty());
    }

    #[test]
    fn test_missing_term_aborts_everything() {
        let sentences = ["cat sat", "dog ran"];
        let concordance = Concordance::build(&sentences);
        let results = search(&terms(&["cat", "zzz"]), &concordance, &sentences);
        assert!(results.is_empty());

        let results = search(&terms(&["zzz", "cat"]), &concordance, &sentences);
        assert!(results.is_empty());
    }

    #[test]
    fn test_multi_term_without_duplicates() {
        let sentences = ["the cat sat", "the dog ran", "cats and dogs"];
        let concordance = Concordance::build(&sentences);
        let results = search(&terms(&["cat", "the"]), &concordance, &sentences);
        assert_eq!(results, vec!["the cat sat", "the dog ran"]);
    }

    #[test]
    fn test_term_order_drives_result_order() {
        let sentences = ["the cat sat", "the dog ran", "a dog and a cat"];
        let concordance = Concordance::build(&sentences);
        let results = search(&terms(&["dog", "cat"]), &concordance, &sentences);
        assert_eq!(results, vec!["the dog ran", "a dog and a cat", "the cat sat"]);
    }

    #[test]
    fn test_terms_are_case_insensitive() {
        let sentences = ["Human events", "free men"];
        let concordance = Concordance::build(&sentences);
        let results = search(&terms(&["HUMAN"]), &concordance, &sentences);
        assert_eq!(results, vec!["Human events"]);
    }

    #[test]
    fn test_identical_sentences_emitted_once() {
        let sentences = ["all men", "all men", "some men"];
        let concordance = Concordance::build(&sentences);
        let results = search(&terms(&["men"]), &concordance, &sentences);
        assert_eq!(results, vec!["all men", "some men"]);
    }

    #[test]
    fn test_unresolved_positions_are_skipped() {
        let concordance = Concordance::build(&["one", "two words"]);
        let shorter = ["one"];
        let results = search(&terms(&["one", "words"]), &concordance, &shorter);
        assert_eq!(results, vec!["one"]);
    }

    #[test]
    fn test_inputs_left_untouched() {
        let sentences = vec!["the cat sat".to_string()];
        let concordance = Concordance::build(&sentences);
        let query = terms(&["cat"]);
        let before = concordance.clone();

        search(&query, &concordance, &sentences);

        assert_eq!(concordance, before);
        assert_eq!(query.to_vec(), vec!["cat"]);
        assert_eq!(sentences, vec!["the cat sat"]);
    }
}
