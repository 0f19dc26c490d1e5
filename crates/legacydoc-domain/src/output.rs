//! The persisted output record

use crate::response::AnalysisResponse;
use serde::{Deserialize, Serialize};

/// The durable artifact written for each successfully processed file.
///
/// Carries the domain classification plus a single flattened documentation
/// string. Only the description survives the flattening; the richer
/// documentation fields (actions, parameters, messages) are modeled in
/// [`AnalysisResponse`] but intentionally not persisted at this stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Name of the analyzed object
    pub object_name: String,

    /// Object kind
    pub object_type: String,

    /// Level-one enterprise domain
    pub level_one_domain: String,

    /// Level-two enterprise domain
    pub level_two_domain: String,

    /// Flattened documentation text
    pub documentation: String,
}

impl From<AnalysisResponse> for Output {
    fn from(response: AnalysisResponse) -> Self {
        Self {
            object_name: response.object_name,
            object_type: response.object_type,
            level_one_domain: response.level_one_domain,
            level_two_domain: response.level_two_domain,
            documentation: response.documentation.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Documentation;

    #[test]
    fn test_output_flattens_description_only() {
        let response = AnalysisResponse {
            object_name: "PROG1".to_string(),
            object_type: "Report".to_string(),
            level_one_domain: "Finance".to_string(),
            level_two_domain: "Billing".to_string(),
            documentation: Documentation {
                program_name: "PROG1".to_string(),
                description: "Prints a greeting.".to_string(),
                author: "unknown".to_string(),
                ..Default::default()
            },
        };

        let output = Output::from(response);
        assert_eq!(output.object_name, "PROG1");
        assert_eq!(output.documentation, "Prints a greeting.");
    }

    #[test]
    fn test_output_wire_format() {
        let output = Output {
            object_name: "PROG1".to_string(),
            object_type: "Report".to_string(),
            level_one_domain: "Finance".to_string(),
            level_two_domain: "Billing".to_string(),
            documentation: "Prints a greeting.".to_string(),
        };
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"levelTwoDomain\":\"Billing\""));
        assert!(json.contains("\"documentation\":\"Prints a greeting.\""));
    }
}
