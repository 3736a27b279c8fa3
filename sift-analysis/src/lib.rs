//! sift-analysis: the Sift working engine.
//!
//! - Merger: repairs sentence boundaries broken by layout artifacts
//! - Mentions: topic keyword filter over the merged stream
//! - Centroids: per-label reference vectors, fingerprints, similarity
//! - Embedding: external model boundary with bounded timeouts
//! - Classify: two-stage gate → centroid scoring → boosts → margin rule
//! - Batch: fingerprint-keyed smart refresh with coverage accounting
//! - Diagnostics: confusion/failure-taxonomy summaries

pub mod batch;
pub mod centroids;
pub mod classify;
pub mod diagnostics;
pub mod embedding;
pub mod mentions;
pub mod merger;

// Re-exports for convenience
pub use batch::{combined_fingerprint, BatchOrchestrator, FileArtifact, SentenceRow};
pub use centroids::CentroidSet;
pub use classify::{classify, decide, replay, CueSets};
pub use diagnostics::{summarize, ConfusionMatrix, DiagnosticsSummary, TransitionCount};
pub use embedding::{embed_with_timeout, EmbeddingProvider, TimedProvider};
pub use mentions::KeywordSet;
pub use merger::FragmentMerger;
