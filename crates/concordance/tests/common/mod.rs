use concordance_core::TermList;

pub fn animal_sentences() -> Vec<String> {
    ["the cat sat", "the dog ran", "cats and dogs"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn terms(values: &[&str]) -> TermList<String> {
    TermList::from_values(values.iter().map(|v| v.to_string()).collect())
}
