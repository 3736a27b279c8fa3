//! Per-batch run manifest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::BatchConfig;

/// A file-level failure, enumerated by identifier. Every failure must
/// appear here; files are never dropped silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub file: String,
    pub reason: String,
}

/// Coverage tally: expected input files vs. files that ended the run with
/// a valid, matching-fingerprint output artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub expected: usize,
    pub covered: usize,
}

impl Coverage {
    pub fn complete(&self) -> bool {
        self.covered == self.expected
    }
}

/// Metadata for one batch run. Created at run start, finalized at run end.
///
/// Later runs read this only to inform operators; staleness decisions use
/// file/centroid fingerprints directly, never the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Parameter values the run was executed with.
    pub config: BatchConfig,
    pub centroid_fingerprint: String,
    /// Count of input files the run was asked to cover.
    pub expected_files: usize,
    /// Files classified fresh this run.
    pub written: usize,
    /// Files whose existing artifact matched the combined fingerprint.
    pub reused: usize,
    pub failures: Vec<FileFailure>,
    pub coverage: Coverage,
}

impl RunManifest {
    /// Successes (written + reused) and named failures must account for
    /// every expected file.
    pub fn accounts_for_all_files(&self) -> bool {
        self.written + self.reused + self.failures.len() == self.expected_files
    }
}
