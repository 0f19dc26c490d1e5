//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pipeline and infrastructure.
//! Concrete implementations live in other crates (legacydoc-llm).

use thiserror::Error;

/// Errors that can occur when talking to a completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Network, authentication, or service failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service returned zero content blocks
    #[error("Empty response from model")]
    EmptyResponse,

    /// The service reply could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The requested model is not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}

/// Trait for completion service operations
///
/// Implemented by the infrastructure layer (legacydoc-llm). One call is one
/// round trip; no retries happen at this boundary.
pub trait CompletionProvider {
    /// Request a completion for `prompt`, allowing at most `max_tokens`
    /// output tokens, and return the reply text.
    fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError>;
}
