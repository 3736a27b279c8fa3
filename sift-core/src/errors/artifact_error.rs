//! Per-file artifact I/O errors. Recorded and skipped, non-fatal.

use std::path::PathBuf;

/// Errors reading or writing a per-file artifact.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("IO error on artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode artifact {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}
