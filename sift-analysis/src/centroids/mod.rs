//! Centroid reference store: per-label reference vectors, content
//! fingerprinting, and cosine similarity lookups.
//!
//! A `CentroidSet` is loaded once per batch run and shared read-only
//! across all classification calls. New training data produces a new set
//! with a new fingerprint; sets are never mutated in place.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use sift_core::errors::ReferenceDataError;
use sift_core::types::{Label, ScoreVector};
use tracing::info;
use xxhash_rust::xxh3::xxh3_64;

/// On-disk shape of the centroid reference artifact.
#[derive(Debug, Serialize, Deserialize)]
struct CentroidArtifact {
    /// When the centroids were computed from labeled training examples.
    generated_at: Option<DateTime<Utc>>,
    /// Mean embedding per label name.
    centroids: FxHashMap<String, Vec<f32>>,
}

/// Reference vectors for the three labels, plus a content fingerprint.
#[derive(Debug, Clone)]
pub struct CentroidSet {
    actionable: Vec<f32>,
    speculative: Vec<f32>,
    irrelevant: Vec<f32>,
    generated_at: Option<DateTime<Utc>>,
    fingerprint: String,
}

impl CentroidSet {
    /// Load and validate a centroid artifact.
    ///
    /// Fails when any label is missing, a vector is empty or carries
    /// non-finite values, or dimensions disagree across labels. No
    /// sentence can be scored without valid reference data, so this is
    /// fatal for the run.
    pub fn load(path: &Path) -> Result<Self, ReferenceDataError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        let mut artifact: CentroidArtifact =
            serde_json::from_str(&raw).map_err(|source| ReferenceDataError::Parse {
                path: PathBuf::from(path),
                source,
            })?;

        let mut take = |label: Label| {
            artifact
                .centroids
                .remove(label.name())
                .ok_or(ReferenceDataError::MissingLabel { label: label.name() })
        };
        let actionable = take(Label::Actionable)?;
        let speculative = take(Label::Speculative)?;
        let irrelevant = take(Label::Irrelevant)?;

        let set = Self::from_vectors(actionable, speculative, irrelevant, artifact.generated_at)?;
        info!(
            path = %path.display(),
            dims = set.dimensions(),
            fingerprint = %set.fingerprint,
            "loaded centroid reference data"
        );
        Ok(set)
    }

    /// Build a set from raw vectors, validating and fingerprinting.
    pub fn from_vectors(
        actionable: Vec<f32>,
        speculative: Vec<f32>,
        irrelevant: Vec<f32>,
        generated_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ReferenceDataError> {
        let expected = actionable.len();
        for (label, vector) in [
            (Label::Actionable, &actionable),
            (Label::Speculative, &speculative),
            (Label::Irrelevant, &irrelevant),
        ] {
            if vector.is_empty() {
                return Err(ReferenceDataError::EmptyVector { label: label.name() });
            }
            if vector.len() != expected {
                return Err(ReferenceDataError::DimensionMismatch {
                    label: label.name(),
                    expected,
                    actual: vector.len(),
                });
            }
            if let Some(index) = vector.iter().position(|v| !v.is_finite()) {
                return Err(ReferenceDataError::NonFiniteValue {
                    label: label.name(),
                    index,
                });
            }
        }

        let fingerprint = fingerprint_vectors(&actionable, &speculative, &irrelevant);
        Ok(Self {
            actionable,
            speculative,
            irrelevant,
            generated_at,
            fingerprint,
        })
    }

    /// Deterministic hash over the serialized numeric content.
    ///
    /// Used exclusively for staleness comparisons, never for equality of
    /// meaning.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    pub fn dimensions(&self) -> usize {
        self.actionable.len()
    }

    /// Cosine similarity of `embedding` against each centroid, computed
    /// independently per label with no normalization across labels.
    pub fn similarity(&self, embedding: &[f32]) -> ScoreVector {
        ScoreVector::new(
            cosine(embedding, &self.actionable),
            cosine(embedding, &self.speculative),
            cosine(embedding, &self.irrelevant),
        )
    }
}

/// xxh3 over label names and little-endian vector bytes, in fixed label
/// order.
fn fingerprint_vectors(actionable: &[f32], speculative: &[f32], irrelevant: &[f32]) -> String {
    let mut buffer = Vec::with_capacity((actionable.len() * 3 + 8) * 4);
    for (label, vector) in [
        (Label::Actionable, actionable),
        (Label::Speculative, speculative),
        (Label::Irrelevant, irrelevant),
    ] {
        buffer.extend_from_slice(label.name().as_bytes());
        for value in vector {
            buffer.extend_from_slice(&value.to_le_bytes());
        }
    }
    format!("{:016x}", xxh3_64(&buffer))
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}
