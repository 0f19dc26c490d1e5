//! Legacydoc CLI library.
//!
//! Argument parsing, configuration loading, and the glue that wires the
//! Bedrock provider into the batch pipeline.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::AppConfig;
pub use error::{CliError, Result};
