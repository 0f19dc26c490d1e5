//! Per-file outcomes and the batch report

use crate::error::PipelineError;
use std::fmt;
use std::path::PathBuf;

/// Pipeline stage a file failed at.
///
/// Mirrors the per-file state machine: a failure at any stage short-circuits
/// the remaining stages for that file only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and deserializing the input file
    Read,
    /// Building the prompt
    Request,
    /// Waiting on the completion service
    Completion,
    /// Locating JSON in the reply
    Extraction,
    /// Normalizing the JSON into the canonical response
    Mapping,
    /// Writing the output file
    Write,
    /// Moving the input into the archive
    Archive,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read => "read",
            Stage::Request => "request",
            Stage::Completion => "completion",
            Stage::Extraction => "extraction",
            Stage::Mapping => "mapping",
            Stage::Write => "write",
            Stage::Archive => "archive",
        };
        f.write_str(name)
    }
}

/// Result of processing one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The whole pipeline succeeded; the input now lives in the archive.
    Processed {
        /// Original input path
        source: PathBuf,
        /// Output file that was written
        output: PathBuf,
        /// Where the input was archived
        archive: PathBuf,
    },
    /// The pipeline failed; the input was left in place.
    Failed {
        /// Original input path
        source: PathBuf,
        /// Stage the failure occurred at
        stage: Stage,
        /// Cause of the failure
        error: PipelineError,
    },
}

impl FileOutcome {
    /// Whether the file was fully processed
    pub fn is_processed(&self) -> bool {
        matches!(self, FileOutcome::Processed { .. })
    }
}

/// Aggregated outcomes for one batch run.
#[derive(Debug, Default)]
pub struct ProcessingReport {
    /// One outcome per enumerated file, in processing order
    pub outcomes: Vec<FileOutcome>,
}

impl ProcessingReport {
    /// Number of fully processed files
    pub fn processed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_processed()).count()
    }

    /// Number of failed files
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.processed_count()
    }

    /// Iterate over failures only
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_processed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let report = ProcessingReport {
            outcomes: vec![
                FileOutcome::Processed {
                    source: "a.json".into(),
                    output: "out/a.json".into(),
                    archive: "arch/a.json".into(),
                },
                FileOutcome::Failed {
                    source: "b.json".into(),
                    stage: Stage::Extraction,
                    error: PipelineError::NoJsonFound,
                },
            ],
        };

        assert_eq!(report.processed_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Completion.to_string(), "completion");
        assert_eq!(Stage::Archive.to_string(), "archive");
    }
}
