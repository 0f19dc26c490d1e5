//! Legacydoc Pipeline Layer
//!
//! Turns one analysis request file into one documentation record:
//!
//! 1. deserialize the input into an [`AnalysisRequest`](legacydoc_domain::AnalysisRequest)
//! 2. assemble the classification prompt ([`prompt`])
//! 3. one round trip to the completion provider
//! 4. locate the JSON answer in the free-form reply ([`extract`])
//! 5. leniently normalize it into the canonical response ([`mapper`])
//! 6. write the flattened output and archive the input ([`processor`])
//!
//! Per-file failures are outcomes, not exceptions: the batch processor
//! aggregates them into a [`ProcessingReport`] and never aborts the run.

#![warn(missing_docs)]

pub mod error;
pub mod extract;
pub mod mapper;
pub mod processor;
pub mod prompt;
pub mod report;

pub use error::PipelineError;
pub use extract::extract_json;
pub use mapper::map_response;
pub use processor::BatchProcessor;
pub use prompt::{PromptBuilder, DEFAULT_ANALYSIS_PROMPT};
pub use report::{FileOutcome, ProcessingReport, Stage};
