//! The file pipeline orchestrator
//!
//! Drives every file in the source directory through read, prompt, model
//! call, extraction, mapping, write, and archive. Files are handled one at a
//! time in enumeration order. A failure at any stage is recorded and the
//! batch continues; nothing short of enumerating the source directory itself
//! aborts a run.

use crate::error::PipelineError;
use crate::extract::extract_json;
use crate::mapper::map_response;
use crate::prompt::PromptBuilder;
use crate::report::{FileOutcome, ProcessingReport, Stage};
use legacydoc_domain::traits::{CompletionError, CompletionProvider};
use legacydoc_domain::{AnalysisRequest, Output};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Processes a batch of analysis request files through the full pipeline.
///
/// Holds the only per-run state: the shared prompt template and
/// enterprise-domain taxonomy, both read-only for the whole run.
pub struct BatchProcessor<P>
where
    P: CompletionProvider,
{
    provider: Arc<P>,
    prompt_template: String,
    enterprise_domains: String,
    max_tokens: u32,
}

impl<P> BatchProcessor<P>
where
    P: CompletionProvider + Send + Sync + 'static,
{
    /// Create a new batch processor
    pub fn new(
        provider: P,
        prompt_template: impl Into<String>,
        enterprise_domains: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            provider: Arc::new(provider),
            prompt_template: prompt_template.into(),
            enterprise_domains: enterprise_domains.into(),
            max_tokens,
        }
    }

    /// Process every file in `source_dir` (non-recursive).
    ///
    /// Returns one outcome per file. Only a failure to enumerate the source
    /// directory is an error here; per-file failures land in the report.
    pub async fn process_all(
        &self,
        source_dir: &Path,
        output_dir: &Path,
        archive_dir: &Path,
    ) -> Result<ProcessingReport, PipelineError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(source_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }

        info!("Found {} files to process", files.len());

        let mut outcomes = Vec::with_capacity(files.len());
        for path in files {
            let outcome = self.process_file(&path, output_dir, archive_dir).await;
            match &outcome {
                FileOutcome::Processed { output, .. } => {
                    info!("Processed {}: output written to {}", path.display(), output.display());
                }
                FileOutcome::Failed { stage, error, .. } => {
                    warn!("Failed {} at {} stage: {}", path.display(), stage, error);
                }
            }
            outcomes.push(outcome);
        }

        let report = ProcessingReport { outcomes };
        info!(
            "Batch complete: {} processed, {} failed",
            report.processed_count(),
            report.failed_count()
        );
        Ok(report)
    }

    /// Run one file through the pipeline.
    pub async fn process_file(
        &self,
        source: &Path,
        output_dir: &Path,
        archive_dir: &Path,
    ) -> FileOutcome {
        debug!("Processing file: {}", source.display());
        match self.run_pipeline(source, output_dir, archive_dir).await {
            Ok((output, archive)) => FileOutcome::Processed {
                source: source.to_path_buf(),
                output,
                archive,
            },
            Err((stage, error)) => FileOutcome::Failed {
                source: source.to_path_buf(),
                stage,
                error,
            },
        }
    }

    async fn run_pipeline(
        &self,
        source: &Path,
        output_dir: &Path,
        archive_dir: &Path,
    ) -> Result<(PathBuf, PathBuf), (Stage, PipelineError)> {
        // Read and deserialize the input
        let raw = fs::read_to_string(source).map_err(|e| (Stage::Read, e.into()))?;
        let mut request: AnalysisRequest = serde_json::from_str(&raw)
            .map_err(|e| (Stage::Read, PipelineError::InvalidInput(e.to_string())))?;
        request.enterprise_domains_json = self.enterprise_domains.clone();

        // Build the prompt
        let prompt = PromptBuilder::new(&request)
            .with_template(&self.prompt_template)
            .build()
            .map_err(|e| (Stage::Request, e))?;
        debug!("Prompt length: {} chars", prompt.len());

        // One round trip to the model
        let reply = self
            .call_model(prompt)
            .await
            .map_err(|e| (Stage::Completion, e))?;
        debug!("Reply length: {} chars", reply.len());

        // Locate the JSON answer
        let json = extract_json(&reply).ok_or((Stage::Extraction, PipelineError::NoJsonFound))?;

        // Normalize into the canonical response
        let response = map_response(json).map_err(|e| (Stage::Mapping, e))?;

        // Write the output; the file is only created once mapping succeeded
        let output = Output::from(response);
        let output_path = output_path_for(source, output_dir);
        let body = serde_json::to_string_pretty(&output)
            .map_err(|e| (Stage::Write, PipelineError::Serialization(e.to_string())))?;
        fs::write(&output_path, body).map_err(|e| (Stage::Write, e.into()))?;

        // Archive the input under its original name, overwriting any prior entry
        let file_name = source.file_name().unwrap_or_else(|| OsStr::new("input"));
        let archive_path = archive_dir.join(file_name);
        move_overwriting(source, &archive_path).map_err(|e| (Stage::Archive, e.into()))?;

        Ok((output_path, archive_path))
    }

    /// Call the completion provider off the async worker thread.
    async fn call_model(&self, prompt: String) -> Result<String, PipelineError> {
        let provider = Arc::clone(&self.provider);
        let max_tokens = self.max_tokens;

        tokio::task::spawn_blocking(move || {
            provider
                .complete(&prompt, max_tokens)
                .map_err(PipelineError::from)
        })
        .await
        .map_err(|e| {
            PipelineError::Completion(CompletionError::Transport(format!(
                "Task join error: {}",
                e
            )))
        })?
    }
}

/// `<output_dir>/<input stem>.json`, regardless of the input extension.
fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_else(|| OsStr::new("output"));
    let mut name = stem.to_os_string();
    name.push(".json");
    output_dir.join(name)
}

/// Move a file, overwriting the destination, falling back to copy+remove
/// when rename is not possible (e.g. across filesystems).
fn move_overwriting(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}
