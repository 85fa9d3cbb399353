use super::Loaded;

pub fn run(loaded: &Loaded) -> anyhow::Result<()> {
    println!("{}", super::to_json(&loaded.concordance, loaded.config.pretty)?);
    Ok(())
}
