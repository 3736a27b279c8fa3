//! Sentences and classification records.

use serde::{Deserialize, Serialize};

use super::{Label, ScoreVector};

/// Where a sentence came from: file identifier plus line index in the
/// merged sentence stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub file: String,
    pub line: u32,
}

/// A sentence plus its source position. Immutable once merged: the merger
/// replaces fragments with a merged superstring, it never mutates in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub source: SourceRef,
}

impl Sentence {
    pub fn new(text: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            text: text.into(),
            source: SourceRef {
                file: file.into(),
                line,
            },
        }
    }
}

/// Outcome of the Stage-0 rejection gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateDecision {
    /// The sentence passed the gate (or the gate was disabled).
    Passed,
    /// Rejected: fewer tokens than `min_tokens`.
    TooShort,
    /// Rejected: list-density / listy-connective heuristics matched.
    Listy,
}

impl GateDecision {
    /// True when the gate rejected the sentence without an embedding call.
    pub fn rejected(&self) -> bool {
        !matches!(self, Self::Passed)
    }
}

/// The immutable result of classifying one sentence.
///
/// Invariant: replaying the decision rule on `scores` and `gate` (with the
/// same config and sentence text) reproduces `label`. This underwrites
/// reproducibility auditing of persisted artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub text: String,
    pub label: Label,
    pub scores: ScoreVector,
    pub gate: GateDecision,
    pub source: SourceRef,
}
