//! Sentence tokenizer over a fixed delimiter set

use regex::Regex;
use std::sync::OnceLock;

static DELIMITER_RE: OnceLock<Regex> = OnceLock::new();

/// Whitespace plus `.` `,` `'` `;`
const DELIMITER_PATTERN: &str = r"[\s.,';]";

fn delimiters() -> &'static Regex {
    DELIMITER_RE.get_or_init(|| Regex::new(DELIMITER_PATTERN).expect("delimiter pattern is valid"))
}

/// Split a sentence into raw tokens.
///
/// Every delimiter occurrence is a separator, so runs of delimiters yield
/// empty tokens. Those are kept here; callers decide what to drop.
pub fn split(sentence: &str) -> impl Iterator<Item = &str> {
    delimiters().split(sentence)
}

/// Split, lower-case, and drop empty tokens.
pub fn words(sentence: &str) -> impl Iterator<Item = String> + '_ {
    split(sentence)
        .map(str::to_lowercase)
        .filter(|word| !word.is_empty())
}
