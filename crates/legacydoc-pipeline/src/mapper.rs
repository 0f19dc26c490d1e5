//! Lenient mapping of extracted JSON into the canonical response
//!
//! The model does not reliably honor the requested field casing or return
//! every field, so mapping runs over a generic JSON tree with
//! case-insensitive key lookup instead of a one-shot typed deserialization.
//! Missing scalars become empty strings, missing lists become empty
//! sequences, and a missing documentation object becomes a zero-valued
//! record. Unknown extra fields are ignored.

use crate::error::PipelineError;
use legacydoc_domain::{Action, AnalysisResponse, Documentation, Message, Parameter};
use serde_json::{Map, Value};

/// Parse a JSON substring and normalize it into an [`AnalysisResponse`].
///
/// Fails only when the substring is not parseable JSON or its top level is
/// not an object; drifted or absent fields never fail the record.
pub fn map_response(json: &str) -> Result<AnalysisResponse, PipelineError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| PipelineError::MalformedJson(e.to_string()))?;

    let obj = value
        .as_object()
        .ok_or_else(|| PipelineError::MalformedJson("expected a JSON object".to_string()))?;

    Ok(AnalysisResponse {
        object_name: string_field(obj, "objectName"),
        object_type: string_field(obj, "objectType"),
        level_one_domain: string_field(obj, "levelOneDomain"),
        level_two_domain: string_field(obj, "levelTwoDomain"),
        documentation: object_field(obj, "documentation")
            .map(map_documentation)
            .unwrap_or_default(),
    })
}

fn map_documentation(obj: &Map<String, Value>) -> Documentation {
    Documentation {
        program_name: string_field(obj, "programName"),
        description: string_field(obj, "description"),
        creation_date: string_field(obj, "creationDate"),
        author: string_field(obj, "author"),
        actions: list_field(obj, "actions", |item| Action {
            r#type: string_field(item, "type"),
            description: string_field(item, "description"),
        }),
        parameters: list_field(obj, "parameters", |item| Parameter {
            name: string_field(item, "name"),
            r#type: string_field(item, "type"),
            description: string_field(item, "description"),
            default_value: string_field(item, "defaultValue"),
        }),
        messages: list_field(obj, "messages", |item| Message {
            message_id: string_field(item, "messageId"),
            description: string_field(item, "description"),
        }),
    }
}

/// Case-insensitive key lookup in a JSON object.
fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

/// Scalar lookup: a missing or non-string field maps to an empty string.
fn string_field(obj: &Map<String, Value>, name: &str) -> String {
    field(obj, name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Nested object lookup: missing or non-object maps to `None`.
fn object_field<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Map<String, Value>> {
    field(obj, name).and_then(Value::as_object)
}

/// List lookup: missing or non-array maps to an empty sequence; non-object
/// elements are skipped.
fn list_field<T>(
    obj: &Map<String, Value>,
    name: &str,
    map_item: impl Fn(&Map<String, Value>) -> T,
) -> Vec<T> {
    field(obj, name)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(&map_item)
                .collect()
        })
        .unwrap_or_default()
}
