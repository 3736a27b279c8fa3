//! Embedding collaborator errors. Per-sentence, non-fatal for the batch.

/// Errors surfaced by the external embedding model boundary.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("empty text after normalization")]
    EmptyInput,

    #[error("embedding call timed out after {ms}ms")]
    Timeout { ms: u64 },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
