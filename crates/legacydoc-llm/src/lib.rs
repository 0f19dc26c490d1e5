//! Legacydoc Model Gateway Layer
//!
//! Implementations of the `CompletionProvider` trait from `legacydoc-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `BedrockProvider`: Anthropic-messages wire format over HTTP
//!
//! # Examples
//!
//! ```
//! use legacydoc_llm::MockProvider;
//! use legacydoc_domain::traits::CompletionProvider;
//!
//! let provider = MockProvider::new("Hello from the model!");
//! let reply = provider.complete("test prompt", 1024).unwrap();
//! assert_eq!(reply, "Hello from the model!");
//! ```

#![warn(missing_docs)]

pub mod bedrock;

use legacydoc_domain::traits::{CompletionError, CompletionProvider};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub use bedrock::BedrockProvider;

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use legacydoc_llm::MockProvider;
/// use legacydoc_domain::traits::CompletionProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.complete("any prompt", 100).unwrap(), "Fixed response");
///
/// // Per-prompt responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.complete("prompt1", 100).unwrap(), "response1");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
    always_fail: bool,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            always_fail: false,
        }
    }

    /// Create a provider that fails every call with a transport error
    pub fn failing() -> Self {
        Self {
            default_response: String::new(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            always_fail: true,
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, CompletionError> {
        *self.call_count.lock().unwrap() += 1;

        if self.always_fail {
            return Err(CompletionError::Transport(
                "mock transport failure".to_string(),
            ));
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default_response() {
        let provider = MockProvider::new("Test response");
        let result = provider.complete("any prompt", 100);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.complete("hello", 100).unwrap(), "world");
        assert_eq!(provider.complete("foo", 100).unwrap(), "bar");
        assert_eq!(
            provider.complete("unknown", 100).unwrap(),
            "Default mock response"
        );
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);
        provider.complete("prompt1", 100).unwrap();
        provider.complete("prompt2", 100).unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_mock_provider_failing() {
        let provider = MockProvider::failing();
        let result = provider.complete("prompt", 100);
        assert!(matches!(result, Err(CompletionError::Transport(_))));
    }

    #[test]
    fn test_mock_provider_clone_shares_call_count() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete("test", 100).unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
