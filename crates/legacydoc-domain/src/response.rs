//! Canonical shape of the model's analysis answer
//!
//! The model is asked to return this structure, but nothing guarantees it
//! does: fields may be missing, renamed in a different casing, or extra. The
//! schema mapper in the pipeline crate normalizes whatever came back into
//! these types, defaulting every absent field instead of failing.

use serde::{Deserialize, Serialize};

/// Validated analysis result for one legacy object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Name of the analyzed object as the model reported it
    pub object_name: String,

    /// Object kind as the model reported it
    pub object_type: String,

    /// Level-one enterprise domain classification
    pub level_one_domain: String,

    /// Level-two enterprise domain classification
    pub level_two_domain: String,

    /// Structured documentation produced by the model
    pub documentation: Documentation,
}

/// Structured documentation for a legacy object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documentation {
    /// Program name as stated in the documentation
    pub program_name: String,

    /// Prose description of what the object does
    pub description: String,

    /// Creation date as free text
    pub creation_date: String,

    /// Author as free text
    pub author: String,

    /// Actions the object performs, in model order
    pub actions: Vec<Action>,

    /// Parameters the object accepts, in model order
    pub parameters: Vec<Parameter>,

    /// Messages the object can emit, in model order
    pub messages: Vec<Message>,
}

/// One action performed by the object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Kind of action
    pub r#type: String,

    /// What the action does
    pub description: String,
}

/// One parameter accepted by the object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Parameter type
    pub r#type: String,

    /// What the parameter controls
    pub description: String,

    /// Default value, if any
    pub default_value: String,
}

/// One message the object can emit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message identifier in the source system
    pub message_id: String,

    /// What the message means
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_response_is_all_empty() {
        let response = AnalysisResponse::default();
        assert!(response.object_name.is_empty());
        assert!(response.level_one_domain.is_empty());
        assert!(response.documentation.actions.is_empty());
        assert!(response.documentation.parameters.is_empty());
        assert!(response.documentation.messages.is_empty());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = AnalysisResponse {
            object_name: "PROG1".to_string(),
            level_one_domain: "Finance".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"objectName\":\"PROG1\""));
        assert!(json.contains("\"levelOneDomain\":\"Finance\""));
    }
}
