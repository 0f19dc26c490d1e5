//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use legacydoc_pipeline::DEFAULT_ANALYSIS_PROMPT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "legacydoc.toml";

/// Application configuration.
///
/// Every field has a default; a run with no config file and no flags works
/// against `./source`, `./output`, and `./archive`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory of analysis request files
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory for documentation records
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory processed inputs are moved to
    #[serde(default = "default_archive_dir")]
    pub archive_dir: PathBuf,

    /// Enterprise-domain taxonomy file, injected into every prompt
    #[serde(default = "default_domains_path")]
    pub enterprise_domains_path: PathBuf,

    /// Instruction template prepended to every prompt
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,

    /// Model identifier
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Model invocation endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token for the invocation endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Maximum output tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicitly given path must exist and parse; otherwise
    /// `./legacydoc.toml` is used when present, and defaults when not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path).map_err(|e| {
                    CliError::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                Ok(toml::from_str(&contents)?)
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    let contents = fs::read_to_string(default_path)?;
                    Ok(toml::from_str(&contents)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply CLI flag overrides on top of the loaded configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(source_dir) = &cli.source_dir {
            self.source_dir = source_dir.clone();
        }
        if let Some(output_dir) = &cli.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(archive_dir) = &cli.archive_dir {
            self.archive_dir = archive_dir.clone();
        }
        if let Some(domains) = &cli.domains {
            self.enterprise_domains_path = domains.clone();
        }
        if let Some(model) = &cli.model {
            self.model_id = model.clone();
        }
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(api_key) = &cli.api_key {
            self.api_key = Some(api_key.clone());
        }
        if let Some(max_tokens) = cli.max_tokens {
            self.max_tokens = max_tokens;
        }
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens == 0 {
            return Err(CliError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }
        if self.model_id.is_empty() {
            return Err(CliError::Config("model_id must not be empty".to_string()));
        }
        Ok(())
    }

    /// Create the source, output, and archive directories if missing.
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [&self.source_dir, &self.output_dir, &self.archive_dir] {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
                info!("Created directory: {}", dir.display());
            }
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            archive_dir: default_archive_dir(),
            enterprise_domains_path: default_domains_path(),
            prompt_template: default_prompt_template(),
            model_id: default_model_id(),
            endpoint: default_endpoint(),
            api_key: None,
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("./source")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

fn default_archive_dir() -> PathBuf {
    PathBuf::from("./archive")
}

fn default_domains_path() -> PathBuf {
    PathBuf::from("enterpriseDomains.json")
}

fn default_prompt_template() -> String {
    DEFAULT_ANALYSIS_PROMPT.to_string()
}

fn default_model_id() -> String {
    "anthropic.claude-3-5-sonnet-20240620-v1:0".to_string()
}

fn default_endpoint() -> String {
    "https://bedrock-runtime.us-east-1.amazonaws.com".to_string()
}

fn default_max_tokens() -> u32 {
    4000
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.source_dir, PathBuf::from("./source"));
        assert_eq!(config.max_tokens, 4000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            source_dir = "/data/in"
            max_tokens = 2000
            "#,
        )
        .unwrap();
        assert_eq!(config.source_dir, PathBuf::from("/data/in"));
        assert_eq!(config.max_tokens, 2000);
        assert_eq!(config.output_dir, PathBuf::from("./output"));
        assert!(!config.prompt_template.is_empty());
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let cli = Cli::parse_from(["legacydoc", "--model", "other-model", "--max-tokens", "512"]);
        let config = AppConfig::default().with_overrides(&cli);
        assert_eq!(config.model_id, "other-model");
        assert_eq!(config.max_tokens, 512);
        // Untouched fields keep their defaults
        assert_eq!(config.archive_dir, PathBuf::from("./archive"));
    }

    #[test]
    fn test_explicit_missing_config_is_fatal() {
        let result = AppConfig::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_zero_max_tokens_is_invalid() {
        let mut config = AppConfig::default();
        config.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ensure_directories_creates_missing() {
        let root = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.source_dir = root.path().join("in");
        config.output_dir = root.path().join("out");
        config.archive_dir = root.path().join("arch");

        config.ensure_directories().unwrap();

        assert!(config.source_dir.is_dir());
        assert!(config.output_dir.is_dir());
        assert!(config.archive_dir.is_dir());
    }
}
