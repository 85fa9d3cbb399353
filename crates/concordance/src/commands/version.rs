use concordance_core::Corpus;

pub fn run() -> anyhow::Result<()> {
    println!("{}", version_text(&Corpus::sample()));
    Ok(())
}

fn version_text(sample: &Corpus) -> String {
    format!(
        "concordance {}\nBundled sample: {} ({} sentences)",
        env!("CARGO_PKG_VERSION"),
        Corpus::SAMPLE_TITLE,
        sample.len()
    )
}
