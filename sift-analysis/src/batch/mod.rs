//! Batch orchestration: per-file artifacts, fingerprint-keyed smart
//! refresh, and coverage accounting.

pub mod artifact;
pub mod orchestrator;

pub use artifact::{FileArtifact, SentenceRow};
pub use orchestrator::{combined_fingerprint, BatchOrchestrator};
