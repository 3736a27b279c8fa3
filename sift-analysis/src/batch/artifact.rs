//! Per-file classification artifacts.
//!
//! One JSON document per input file: the combined fingerprint it was
//! computed under, the config used, and one row per classified sentence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sift_core::config::ClassifyConfig;
use sift_core::errors::ArtifactError;
use sift_core::types::{ClassificationRecord, GateDecision, Label};

/// One classified sentence, flattened for the tabular artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRow {
    pub line: u32,
    pub text: String,
    pub label: Label,
    pub actionable: f32,
    pub speculative: f32,
    pub irrelevant: f32,
    pub gate: GateDecision,
}

impl From<&ClassificationRecord> for SentenceRow {
    fn from(record: &ClassificationRecord) -> Self {
        Self {
            line: record.source.line,
            text: record.text.clone(),
            label: record.label,
            actionable: record.scores.actionable,
            speculative: record.scores.speculative,
            irrelevant: record.scores.irrelevant,
            gate: record.gate,
        }
    }
}

/// The persisted output for one input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileArtifact {
    /// hash(file content) combined with the centroid fingerprint.
    pub fingerprint: String,
    pub config: ClassifyConfig,
    pub rows: Vec<SentenceRow>,
}

/// Sibling path for an input file's classification artifact.
pub fn artifact_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(".classified.json");
    input.with_file_name(name)
}

pub fn read(path: &Path) -> Result<FileArtifact, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: PathBuf::from(path),
        source,
    })
}

pub fn write(path: &Path, artifact: &FileArtifact) -> Result<(), ArtifactError> {
    let encoded = serde_json::to_string(artifact).map_err(|source| ArtifactError::Encode {
        path: PathBuf::from(path),
        source,
    })?;
    std::fs::write(path, encoded).map_err(|source| ArtifactError::Io {
        path: PathBuf::from(path),
        source,
    })
}

/// True when `input` has an artifact whose recorded fingerprint matches.
///
/// Unreadable or malformed artifacts are simply stale.
pub fn is_fresh(input: &Path, fingerprint: &str) -> bool {
    read(&artifact_path(input))
        .map(|artifact| artifact.fingerprint == fingerprint)
        .unwrap_or(false)
}
