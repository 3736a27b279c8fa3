//! Tests for the core data model: records, manifests, and coverage
//! accounting.

use chrono::Utc;
use sift_core::config::BatchConfig;
use sift_core::types::{
    ClassificationRecord, Coverage, FileFailure, GateDecision, Label, RunManifest, ScoreVector,
    Sentence, SourceRef,
};

#[test]
fn classification_record_round_trips_through_json() {
    let record = ClassificationRecord {
        text: "We deployed a model.".to_string(),
        label: Label::Actionable,
        scores: ScoreVector::new(0.8, 0.1, -0.2),
        gate: GateDecision::Passed,
        source: SourceRef {
            file: "filing.txt".to_string(),
            line: 3,
        },
    };

    let json = serde_json::to_string(&record).unwrap();
    let back: ClassificationRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn gate_decision_rejected_covers_both_rejection_kinds() {
    assert!(!GateDecision::Passed.rejected());
    assert!(GateDecision::TooShort.rejected());
    assert!(GateDecision::Listy.rejected());
}

#[test]
fn sentence_constructor_fills_source_position() {
    let sentence = Sentence::new("text", "a.txt", 7);
    assert_eq!(sentence.source.file, "a.txt");
    assert_eq!(sentence.source.line, 7);
}

#[test]
fn manifest_accounting_balances_successes_and_failures() {
    let now = Utc::now();
    let manifest = RunManifest {
        started_at: now,
        finished_at: now,
        config: BatchConfig::default(),
        centroid_fingerprint: "00000000deadbeef".to_string(),
        expected_files: 20,
        written: 15,
        reused: 3,
        failures: vec![
            FileFailure {
                file: "a.txt".to_string(),
                reason: "timed out".to_string(),
            },
            FileFailure {
                file: "b.txt".to_string(),
                reason: "read failed".to_string(),
            },
        ],
        coverage: Coverage {
            expected: 20,
            covered: 18,
        },
    };

    assert!(manifest.accounts_for_all_files());
    assert!(!manifest.coverage.complete());
}

#[test]
fn manifest_round_trips_through_json() {
    let now = Utc::now();
    let manifest = RunManifest {
        started_at: now,
        finished_at: now,
        config: BatchConfig::default(),
        centroid_fingerprint: "feedfacecafebeef".to_string(),
        expected_files: 1,
        written: 1,
        reused: 0,
        failures: Vec::new(),
        coverage: Coverage {
            expected: 1,
            covered: 1,
        },
    };

    let json = serde_json::to_string(&manifest).unwrap();
    let back: RunManifest = serde_json::from_str(&json).unwrap();
    assert_eq!(back.centroid_fingerprint, manifest.centroid_fingerprint);
    assert_eq!(back.config, manifest.config);
    assert!(back.coverage.complete());
}
