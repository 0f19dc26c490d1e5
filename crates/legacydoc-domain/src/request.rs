//! The unit of work submitted for analysis

use crate::metadata::Metadata;
use serde::{Deserialize, Serialize};

/// One legacy object submitted for analysis.
///
/// Deserialized from a single input file. `metadata` and `source_code` are
/// required on the wire; deserialization fails without them. The
/// enterprise-domain taxonomy is not part of the persisted file - the
/// orchestrator injects the shared per-run copy before building the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Descriptive facts about the legacy object
    pub metadata: Metadata,

    /// Full source code of the legacy object
    pub source_code: String,

    /// Shared enterprise-domain taxonomy, injected per run
    #[serde(rename = "enterpriseDomainsJSON", default)]
    pub enterprise_domains_json: String,
}
