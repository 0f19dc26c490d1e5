//! Bedrock Provider Implementation
//!
//! Talks to a Bedrock-compatible model invocation endpoint using the
//! Anthropic messages wire format. One `complete` call is exactly one round
//! trip: no retries, no streaming. Sampling parameters are fixed at
//! conservative values and are not user-configurable.
//!
//! # Examples
//!
//! ```no_run
//! use legacydoc_llm::BedrockProvider;
//!
//! let provider = BedrockProvider::new(
//!     "https://bedrock-runtime.us-east-1.amazonaws.com",
//!     "anthropic.claude-3-5-sonnet-20240620-v1:0",
//! );
//! ```

use legacydoc_domain::traits::{CompletionError, CompletionProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Wire version tag expected by the invocation endpoint
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Default request timeout (transport-level; not a pipeline policy)
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

// Fixed sampling parameters, matching the values the batch was tuned with.
const TEMPERATURE: f64 = 1.0;
const TOP_P: f64 = 0.999;
const TOP_K: u32 = 250;

/// Completion provider speaking the Anthropic messages format to a
/// Bedrock-style invocation endpoint.
pub struct BedrockProvider {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

/// Request body for the invocation endpoint
#[derive(Serialize)]
struct InvokeRequest {
    anthropic_version: &'static str,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    top_k: u32,
    stop_sequences: Vec<String>,
    messages: Vec<RequestMessage>,
}

#[derive(Serialize)]
struct RequestMessage {
    role: &'static str,
    content: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

/// Response body from the invocation endpoint
#[derive(Deserialize)]
struct InvokeResponse {
    #[allow(dead_code)]
    id: Option<String>,
    #[allow(dead_code)]
    model: Option<String>,
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[allow(dead_code)]
    stop_reason: Option<String>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    #[allow(dead_code)]
    kind: Option<String>,
    text: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: Option<u64>,
    output_tokens: Option<u64>,
}

impl BedrockProvider {
    /// Create a new Bedrock provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: base URL of the invocation endpoint
    /// - `model`: model identifier (e.g., "anthropic.claude-3-5-sonnet-20240620-v1:0")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
            client,
        }
    }

    /// Attach a bearer token used to authenticate invocation requests
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Send one completion request and return the reply text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint is unreachable or rejects the credentials
    /// - The model is not available
    /// - The reply carries no content blocks
    /// - The reply body cannot be decoded
    pub async fn invoke(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError> {
        let url = format!("{}/model/{}/invoke", self.endpoint, self.model);

        let request_body = InvokeRequest {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            stop_sequences: Vec::new(),
            messages: vec![RequestMessage {
                role: "user",
                content: vec![RequestContent {
                    kind: "text",
                    text: prompt.to_string(),
                }],
            }],
        };

        let mut request = self.client.post(&url).json(&request_body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CompletionError::Transport(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CompletionError::ModelNotAvailable(self.model.clone()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CompletionError::Transport(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let invoke_response: InvokeResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = &invoke_response.usage {
            debug!(
                "Token usage: {} in, {} out",
                usage.input_tokens.unwrap_or(0),
                usage.output_tokens.unwrap_or(0)
            );
        }

        invoke_response
            .content
            .first()
            .and_then(|block| block.text.clone())
            .ok_or(CompletionError::EmptyResponse)
    }
}

impl CompletionProvider for BedrockProvider {
    fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError> {
        // Blocking wrapper for the async call; callers run this inside
        // spawn_blocking, never on an async worker thread.
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| CompletionError::Transport(format!("Runtime error: {}", e)))?;
        runtime.block_on(self.invoke(prompt, max_tokens))
    }
}
