//! Batch orchestrator: drives classification over many files with
//! fingerprint-keyed smart refresh and coverage verification.
//!
//! Files are independent units of work. Each rayon worker owns its file's
//! output artifact exclusively; the only shared state is the read-only
//! `CentroidSet`. A file that fails is recorded in the manifest and the
//! batch proceeds. A rerun naturally reattempts it because no valid
//! artifact was written.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rayon::prelude::*;
use sift_core::config::BatchConfig;
use sift_core::errors::ConfigError;
use sift_core::types::{Coverage, FileFailure, RunManifest, Sentence};
use tracing::{debug, info, warn};
use xxhash_rust::xxh3::Xxh3;

use super::artifact::{self, FileArtifact, SentenceRow};
use crate::centroids::CentroidSet;
use crate::classify;
use crate::embedding::{EmbeddingProvider, TimedProvider};
use crate::mentions::KeywordSet;
use crate::merger::FragmentMerger;

/// Staleness key for one input file: hash of its content combined with
/// the centroid fingerprint. Content identity, not wall-clock timestamps;
/// mtimes are not reliable across file systems or checkouts.
pub fn combined_fingerprint(content: &str, centroid_fingerprint: &str) -> String {
    let mut hasher = Xxh3::new();
    hasher.update(content.as_bytes());
    hasher.update(centroid_fingerprint.as_bytes());
    format!("{:016x}", hasher.digest())
}

enum FileOutcome {
    Written { sentences: usize },
    Reused,
    Failed { reason: String },
}

/// Drives a batch classification run.
pub struct BatchOrchestrator {
    config: BatchConfig,
    merger: FragmentMerger,
    keywords: Option<KeywordSet>,
}

impl BatchOrchestrator {
    /// Validate config and build an orchestrator. Validation failures
    /// reject the run here, before any file is touched.
    pub fn new(config: BatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            merger: FragmentMerger::new(),
            keywords: None,
        })
    }

    /// Restrict classification to sentences mentioning the topic.
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Run the batch over `files`, returning the finalized manifest.
    pub fn run(
        &self,
        files: &[PathBuf],
        centroids: &CentroidSet,
        provider: Arc<dyn EmbeddingProvider>,
    ) -> RunManifest {
        let started_at = Utc::now();

        if self.config.threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.threads)
                .build_global()
                .ok();
        }

        let timed: Arc<dyn EmbeddingProvider> = Arc::new(TimedProvider::new(
            provider,
            Duration::from_millis(self.config.embed_timeout_ms),
        ));

        info!(
            files = files.len(),
            force = self.config.force,
            centroid_fingerprint = %centroids.fingerprint(),
            "starting batch run"
        );

        let outcomes: Vec<(PathBuf, FileOutcome)> = files
            .par_iter()
            .map(|path| (path.clone(), self.process_file(path, centroids, timed.as_ref())))
            .collect();

        let mut written = 0;
        let mut reused = 0;
        let mut failures = Vec::new();
        for (path, outcome) in &outcomes {
            match outcome {
                FileOutcome::Written { sentences } => {
                    written += 1;
                    debug!(file = %path.display(), sentences, "wrote artifact");
                }
                FileOutcome::Reused => {
                    reused += 1;
                    debug!(file = %path.display(), "reused artifact");
                }
                FileOutcome::Failed { reason } => {
                    warn!(file = %path.display(), reason = %reason, "file failed");
                    failures.push(FileFailure {
                        file: path.display().to_string(),
                        reason: reason.clone(),
                    });
                }
            }
        }

        let coverage = Coverage {
            expected: files.len(),
            covered: verify_coverage(files, centroids),
        };
        if !coverage.complete() {
            // Reported, never raised: a partial batch is a valid,
            // inspectable outcome that downstream consumers must see.
            warn!(
                expected = coverage.expected,
                covered = coverage.covered,
                "coverage mismatch"
            );
        }

        let manifest = RunManifest {
            started_at,
            finished_at: Utc::now(),
            config: self.config.clone(),
            centroid_fingerprint: centroids.fingerprint().to_string(),
            expected_files: files.len(),
            written,
            reused,
            failures,
            coverage,
        };

        info!(
            written = manifest.written,
            reused = manifest.reused,
            failed = manifest.failures.len(),
            covered = coverage.covered,
            "batch run finished"
        );

        if let Some(path) = &self.config.manifest_path {
            if let Err(error) = write_manifest(path, &manifest) {
                warn!(path = %path.display(), %error, "failed to write run manifest");
            }
        }

        manifest
    }

    fn process_file(
        &self,
        path: &Path,
        centroids: &CentroidSet,
        provider: &dyn EmbeddingProvider,
    ) -> FileOutcome {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                return FileOutcome::Failed {
                    reason: format!("read failed: {error}"),
                }
            }
        };

        let fingerprint = combined_fingerprint(&content, centroids.fingerprint());
        let out_path = artifact::artifact_path(path);
        if !self.config.force && artifact::is_fresh(path, &fingerprint) {
            return FileOutcome::Reused;
        }

        let raw: Vec<String> = content.lines().map(str::to_string).collect();
        let merged = self.merger.merge(&raw);
        let kept = match &self.keywords {
            Some(keywords) => keywords.filter(&merged),
            None => merged,
        };

        let file_id = path.display().to_string();
        let mut rows = Vec::with_capacity(kept.len());
        for (index, text) in kept.iter().enumerate() {
            let sentence = Sentence::new(text.clone(), file_id.clone(), index as u32);
            match classify::classify(&sentence, centroids, provider, &self.config.classify) {
                Ok(record) => rows.push(SentenceRow::from(&record)),
                Err(error) => {
                    // A failed sentence fails the whole file; partial
                    // artifacts are never written.
                    return FileOutcome::Failed {
                        reason: format!("sentence {index}: {error}"),
                    };
                }
            }
        }

        let sentences = rows.len();
        let output = FileArtifact {
            fingerprint,
            config: self.config.classify.clone(),
            rows,
        };
        match artifact::write(&out_path, &output) {
            Ok(()) => FileOutcome::Written { sentences },
            Err(error) => FileOutcome::Failed {
                reason: error.to_string(),
            },
        }
    }
}

/// Count files that ended the run with a valid, matching-fingerprint
/// artifact. Re-reads inputs rather than trusting in-run bookkeeping.
fn verify_coverage(files: &[PathBuf], centroids: &CentroidSet) -> usize {
    files
        .par_iter()
        .filter(|path| match std::fs::read_to_string(path) {
            Ok(content) => {
                let fingerprint = combined_fingerprint(&content, centroids.fingerprint());
                artifact::is_fresh(path, &fingerprint)
            }
            Err(_) => false,
        })
        .count()
}

fn write_manifest(path: &Path, manifest: &RunManifest) -> Result<(), std::io::Error> {
    let encoded = serde_json::to_string_pretty(manifest)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, encoded)
}
