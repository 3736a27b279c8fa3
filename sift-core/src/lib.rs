//! sift-core: core types, errors, config, and tracing for the Sift
//! sentence-classification engine.
//!
//! - Types: labels, score vectors, sentences, classification records,
//!   run manifests
//! - Config: classification and batch parameter surfaces with validation
//! - Errors: the run/file/sentence fatality taxonomy
//! - Tracing: `SIFT_LOG`-driven subscriber setup

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::{BatchConfig, ClassifyConfig};
pub use errors::{ArtifactError, ConfigError, EmbeddingError, ReferenceDataError};
pub use types::{
    ClassificationRecord, Coverage, FileFailure, GateDecision, Label, RunManifest, ScoreVector,
    Sentence, SourceRef,
};
