use anyhow::Result;

use dadjokes_core::{AppConfig, JokeFetcher};

pub async fn run(config: &AppConfig) -> Result<()> {
    let fetcher = JokeFetcher::new(config)?;
    let jokes = fetcher.fetch().await?;

    if jokes.is_empty() {
        println!("The endpoint served no jokes.");
        return Ok(());
    }

    for joke in &jokes {
        println!("[{}] {}", joke.category, joke.setup);
        println!("    {}", joke.punchline);
    }
    println!("\n{} jokes", jokes.len());
    Ok(())
}
