use super::Loaded;
use concordance_core::TermList;

pub fn run(loaded: &Loaded, terms: Vec<String>, json: bool) -> anyhow::Result<()> {
    let terms = TermList::from_values(terms);
    tracing::debug!(terms = %terms, "searching");

    let matches = concordance_core::search(
        &terms,
        &loaded.concordance,
        loaded.corpus.sentences(),
    );

    let output = render(&matches, json, loaded.config.pretty)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn render(matches: &[String], json: bool, pretty: bool) -> anyhow::Result<String> {
    if json {
        super::to_json(&matches, pretty)
    } else {
        Ok(matches.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lines() {
        let matches = vec!["one".to_string(), "two".to_string()];
        assert_eq!(render(&matches, false, true).unwrap(), "one\ntwo");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], false, true).unwrap(), "");
        assert_eq!(render(&[], true, false).unwrap(), "[]");
    }
}
