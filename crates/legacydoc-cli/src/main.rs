//! Legacydoc - batch-document legacy objects with a completion model.

use clap::Parser;
use legacydoc_cli::{AppConfig, Cli, CliError, Result};
use legacydoc_llm::BedrockProvider;
use legacydoc_pipeline::{BatchProcessor, FileOutcome};
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    config.validate()?;
    config.ensure_directories()?;

    info!("Using source folder: {}", config.source_dir.display());
    info!("Using output folder: {}", config.output_dir.display());
    info!("Using archive folder: {}", config.archive_dir.display());
    info!("Using model: {}", config.model_id);

    // The taxonomy is loaded once and shared read-only across the run;
    // failing to read it aborts before any file is touched.
    let enterprise_domains =
        fs::read_to_string(&config.enterprise_domains_path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read enterprise domains file {}: {}",
                config.enterprise_domains_path.display(),
                e
            ))
        })?;

    let mut provider = BedrockProvider::new(&config.endpoint, &config.model_id);
    if let Some(api_key) = &config.api_key {
        provider = provider.with_api_key(api_key);
    }

    let processor = BatchProcessor::new(
        provider,
        config.prompt_template.as_str(),
        enterprise_domains,
        config.max_tokens,
    );

    let report = processor
        .process_all(&config.source_dir, &config.output_dir, &config.archive_dir)
        .await?;

    println!(
        "Processed {} file(s), {} failed",
        report.processed_count(),
        report.failed_count()
    );
    for outcome in report.failures() {
        if let FileOutcome::Failed {
            source,
            stage,
            error,
        } = outcome
        {
            eprintln!("  {} ({} stage): {}", source.display(), stage, error);
        }
    }

    Ok(())
}
