//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Legacydoc - batch-document legacy objects with a completion model.
#[derive(Debug, Parser)]
#[command(name = "legacydoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory of analysis request files
    #[arg(long, env = "LEGACYDOC_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Directory for documentation records
    #[arg(long, env = "LEGACYDOC_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory processed inputs are moved to
    #[arg(long, env = "LEGACYDOC_ARCHIVE_DIR")]
    pub archive_dir: Option<PathBuf>,

    /// Enterprise-domain taxonomy file
    #[arg(long, env = "LEGACYDOC_DOMAINS")]
    pub domains: Option<PathBuf>,

    /// Model identifier
    #[arg(long, env = "LEGACYDOC_MODEL")]
    pub model: Option<String>,

    /// Model invocation endpoint
    #[arg(long, env = "LEGACYDOC_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Bearer token for the invocation endpoint
    #[arg(long, env = "LEGACYDOC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Maximum output tokens per completion
    #[arg(long, env = "LEGACYDOC_MAX_TOKENS")]
    pub max_tokens: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_with_no_args() {
        let cli = Cli::parse_from(["legacydoc"]);
        assert!(cli.config.is_none());
        assert!(cli.source_dir.is_none());
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from([
            "legacydoc",
            "--source-dir",
            "/tmp/in",
            "--model",
            "claude",
            "--max-tokens",
            "2000",
        ]);
        assert_eq!(cli.source_dir, Some(PathBuf::from("/tmp/in")));
        assert_eq!(cli.model.as_deref(), Some("claude"));
        assert_eq!(cli.max_tokens, Some(2000));
    }
}
