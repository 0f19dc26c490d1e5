//! Descriptive metadata for a legacy object under analysis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Facts about the legacy object being analyzed.
///
/// Read from the input file and immutable from then on. Field names follow
/// the camelCase wire format of the input files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Name of the legacy object (program, screen, report, ...)
    #[serde(default)]
    pub object_name: Option<String>,

    /// Object kind within the source system
    #[serde(default)]
    pub object_type: Option<String>,

    /// Source-system attribute string
    #[serde(default)]
    pub object_attribute: Option<String>,

    /// Family/grouping the object belongs to
    #[serde(default)]
    pub object_family: Option<String>,

    /// Free-text description carried over from the source system
    #[serde(default)]
    pub object_description: Option<String>,

    /// When the object was first defined
    #[serde(default)]
    pub object_first_defined: Option<DateTime<Utc>>,

    /// When the object was last modified
    #[serde(default)]
    pub object_last_touched: Option<DateTime<Utc>>,

    /// Number of objects this one depends on
    #[serde(default)]
    pub object_dependency_count: i64,

    /// Number of objects that reference this one
    #[serde(default)]
    pub object_referenced_by_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_wire_format_is_camel_case() {
        let json = r#"{
            "objectName": "ZPROG1",
            "objectType": "Report",
            "objectAttribute": "X",
            "objectFamily": "Billing",
            "objectDescription": "Monthly billing run",
            "objectFirstDefined": "1999-04-01T00:00:00Z",
            "objectLastTouched": "2019-11-30T08:15:00Z",
            "objectDependencyCount": 12,
            "objectReferencedByCount": 3
        }"#;

        let metadata: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.object_name.as_deref(), Some("ZPROG1"));
        assert_eq!(metadata.object_type.as_deref(), Some("Report"));
        assert_eq!(metadata.object_dependency_count, 12);
        assert_eq!(metadata.object_referenced_by_count, 3);
    }

    #[test]
    fn test_metadata_round_trip() {
        let json = r#"{
            "objectName": "ZPROG1",
            "objectType": "Report",
            "objectAttribute": "X",
            "objectFamily": "Billing",
            "objectDescription": "Monthly billing run",
            "objectFirstDefined": "1999-04-01T00:00:00Z",
            "objectLastTouched": "2019-11-30T08:15:00Z",
            "objectDependencyCount": 12,
            "objectReferencedByCount": 3
        }"#;

        let metadata: Metadata = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&metadata).unwrap();
        let decoded: Metadata = serde_json::from_str(&encoded).unwrap();
        assert_eq!(metadata, decoded);
    }

    #[test]
    fn test_optional_fields_default() {
        let metadata: Metadata = serde_json::from_str("{}").unwrap();
        assert!(metadata.object_name.is_none());
        assert!(metadata.object_first_defined.is_none());
        assert_eq!(metadata.object_dependency_count, 0);
    }
}
