//! Legacydoc Domain Layer
//!
//! This crate contains the data model shared by every other layer: the
//! legacy-object metadata read from input files, the analysis request
//! submitted to the completion model, the canonical analysis response the
//! model is asked to produce, and the flattened output record that gets
//! persisted.
//!
//! ## Key Concepts
//!
//! - **AnalysisRequest**: one input file - metadata plus source code, with
//!   the shared enterprise-domain taxonomy injected per run
//! - **AnalysisResponse**: the canonical shape of the model's answer; every
//!   field is optional on the wire and defaulted during mapping
//! - **Output**: the durable artifact - domain classification plus a single
//!   flattened documentation string
//!
//! ## Architecture
//!
//! Infrastructure implementations (the actual model gateway) live in other
//! crates; this crate only defines the `CompletionProvider` boundary trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod metadata;
pub mod output;
pub mod request;
pub mod response;
pub mod traits;

// Re-exports for convenience
pub use metadata::Metadata;
pub use output::Output;
pub use request::AnalysisRequest;
pub use response::{Action, AnalysisResponse, Documentation, Message, Parameter};
pub use traits::{CompletionError, CompletionProvider};
