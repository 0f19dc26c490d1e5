//! Prompt assembly for the domain-classification request

use crate::error::PipelineError;
use legacydoc_domain::AnalysisRequest;

/// Builds the prompt sent to the completion model for one request
pub struct PromptBuilder<'a> {
    request: &'a AnalysisRequest,
    template: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder with the default instruction template
    pub fn new(request: &'a AnalysisRequest) -> Self {
        Self {
            request,
            template: DEFAULT_ANALYSIS_PROMPT,
        }
    }

    /// Use a custom instruction template
    pub fn with_template(mut self, template: &'a str) -> Self {
        self.template = template;
        self
    }

    /// Build the complete prompt text
    ///
    /// The prompt is the template, then a JSON view of the request (metadata,
    /// source code, and the injected enterprise-domain taxonomy), separated
    /// by a blank line. Plain text throughout; the gateway owns any further
    /// message framing.
    pub fn build(&self) -> Result<String, PipelineError> {
        let request_json = serde_json::to_string(self.request)
            .map_err(|e| PipelineError::Serialization(e.to_string()))?;

        Ok(format!("{}\n\n{}\n\n", self.template, request_json))
    }
}

/// Default instruction template for the domain-classification prompt
pub const DEFAULT_ANALYSIS_PROMPT: &str = r#"You are documenting a legacy system. The JSON below holds one legacy object: its metadata, its full source code, and an enterprise-domain taxonomy (enterpriseDomainsJSON).

Analyze the source code and classify the object against the taxonomy. Reply with exactly one JSON object of this shape:

{
  "objectName": "name of the object",
  "objectType": "kind of object",
  "levelOneDomain": "level-one domain from the taxonomy",
  "levelTwoDomain": "level-two domain from the taxonomy",
  "documentation": {
    "programName": "program name",
    "description": "what the object does and why",
    "creationDate": "creation date if stated",
    "author": "author if stated",
    "actions": [{ "type": "...", "description": "..." }],
    "parameters": [{ "name": "...", "type": "...", "description": "...", "defaultValue": "..." }],
    "messages": [{ "messageId": "...", "description": "..." }]
  }
}

Return ONLY the JSON object, no explanations."#;
