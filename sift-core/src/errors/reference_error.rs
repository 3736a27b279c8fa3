//! Centroid reference data errors. Fatal for the whole run.

use std::path::PathBuf;

/// Errors loading or validating centroid reference data.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("IO error reading centroid artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed centroid artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("centroid artifact is missing label: {label}")]
    MissingLabel { label: &'static str },

    #[error("centroid vector for {label} is empty")]
    EmptyVector { label: &'static str },

    #[error("centroid vector for {label} has non-finite value at index {index}")]
    NonFiniteValue { label: &'static str, index: usize },

    #[error("centroid dimension mismatch: {label} has {actual}, expected {expected}")]
    DimensionMismatch {
        label: &'static str,
        expected: usize,
        actual: usize,
    },
}
