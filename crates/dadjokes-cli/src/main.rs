use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dadjokes_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "dadjokes")]
#[command(author, version, about = "Swipeable dad jokes in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the configured joke endpoint URL
    #[arg(short = 'e', long = "endpoint")]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print one random joke and exit
    Random,
    /// Print every joke the endpoint serves
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }

    // Initialize logging (RUST_LOG wins over the configured level)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Arc::new(config);

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Random) => commands::random::run(&config).await,
        Some(Commands::List) => commands::list::run(&config).await,
    }
}
