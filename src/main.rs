use anyhow::{Context, Result};
use clap::Parser;
use jobby_client::cli::{handle_command, Cli};
use jobby_client::core::ConfigManager;
use jobby_client::utils::ensure_parent_dir;
use std::fs::OpenOptions;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ConfigManager::load()?;

    // Logs go to a file; the terminal belongs to the rendered screens
    ensure_parent_dir(&config.logging.file)?;
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.logging.file)
        .with_context(|| format!("Failed to open log file: {}", config.logging.file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    tracing::info!("Environment: {}", config.environment);
    handle_command(cli, config).await
}
