use super::Loaded;
use concordance_core::Concordance;

pub fn run(loaded: &Loaded) -> anyhow::Result<()> {
    let output = build_stats(loaded.corpus.len(), &loaded.concordance);
    println!("{}", super::to_json(&output, loaded.config.pretty)?);
    Ok(())
}

fn build_stats(sentences: usize, concordance: &Concordance) -> serde_json::Value {
    let busiest = concordance
        .iter()
        .max_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| b.0.cmp(a.0)))
        .map(|(word, positions)| serde_json::json!({ "word": word, "sentences": positions.len() }));

    serde_json::json!({
        "sentences": sentences,
        "words": concordance.len(),
        "busiest": busiest,
    })
}
