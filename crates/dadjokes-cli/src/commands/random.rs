use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;

use dadjokes_core::{AppConfig, JokeFetcher};

pub async fn run(config: &AppConfig) -> Result<()> {
    let fetcher = JokeFetcher::new(config)?;
    let jokes = fetcher.fetch().await?;

    let joke = jokes
        .choose(&mut rand::thread_rng())
        .ok_or_else(|| anyhow!("the endpoint served no jokes"))?;

    println!("{}", joke.setup);
    println!("{}", joke.punchline);
    Ok(())
}
