//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// These are fatal: anything that goes wrong before the batch starts aborts
/// the run. Per-file failures inside the batch are reported, not raised.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Pipeline error surfaced outside the per-file boundary
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] legacydoc_pipeline::PipelineError),
}
