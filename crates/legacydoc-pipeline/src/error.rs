//! Error types for the pipeline

use legacydoc_domain::traits::CompletionError;
use thiserror::Error;

/// Errors that can occur while processing a single file.
///
/// Every variant is recovered at the per-file boundary: the batch processor
/// records the failure and moves on to the next file.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input file is malformed or missing required fields
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Completion service failure (transport, auth, or empty reply)
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    /// The model reply contains no JSON object
    #[error("No JSON found in model reply")]
    NoJsonFound,

    /// JSON was located in the reply but does not parse
    #[error("Malformed JSON in model reply: {0}")]
    MalformedJson(String),

    /// Internal encode failure
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
