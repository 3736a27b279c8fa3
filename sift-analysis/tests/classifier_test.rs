//! Classification engine tests: gate short-circuit, boosts, margin rule,
//! determinism, and record replay.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use sift_analysis::centroids::CentroidSet;
use sift_analysis::classify::{classify, replay};
use sift_analysis::embedding::EmbeddingProvider;
use sift_core::config::ClassifyConfig;
use sift_core::errors::EmbeddingError;
use sift_core::types::{GateDecision, Label, Sentence};

// ---- Helpers ----

/// Deterministic provider with preset embeddings per sentence text and a
/// call counter to observe gate short-circuits.
struct FixtureProvider {
    map: HashMap<String, Vec<f32>>,
    fallback: Vec<f32>,
    calls: AtomicUsize,
}

impl FixtureProvider {
    fn new() -> Self {
        Self {
            map: HashMap::new(),
            fallback: vec![0.3, 0.2, 0.1],
            calls: AtomicUsize::new(0),
        }
    }

    fn with(mut self, text: &str, embedding: Vec<f32>) -> Self {
        self.map.insert(text.to_string(), embedding);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingProvider for FixtureProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .map
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }

    fn dimensions(&self) -> usize {
        3
    }
}

/// Axis-aligned centroids: embeddings are (cos_A, cos_S, cos_I) for unit
/// vectors, which makes score construction direct.
fn toy_centroids() -> CentroidSet {
    CentroidSet::from_vectors(
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
        None,
    )
    .unwrap()
}

fn sentence(text: &str) -> Sentence {
    Sentence::new(text, "test.txt", 0)
}

/// Unit vector with the requested cosine against the A and S axes.
fn unit_embedding(cos_a: f32, cos_s: f32) -> Vec<f32> {
    let rest = (1.0 - cos_a * cos_a - cos_s * cos_s).max(0.0).sqrt();
    vec![cos_a, cos_s, rest]
}

// ---- Gate short-circuit ----

#[test]
fn listy_sentence_is_gated_without_embedding_call() {
    let text = "We offer consulting, including risk, compliance, privacy, \
                data security, and artificial intelligence advisory services.";
    let provider = FixtureProvider::new();
    let config = ClassifyConfig::default();

    let record = classify(&sentence(text), &toy_centroids(), &provider, &config).unwrap();

    assert_eq!(record.label, Label::Irrelevant);
    assert_eq!(record.gate, GateDecision::Listy);
    assert_eq!(provider.calls(), 0, "gate rejection must skip the embedding call");
}

#[test]
fn short_sentence_is_gated_without_embedding_call() {
    let provider = FixtureProvider::new();
    let config = ClassifyConfig::default();

    let record = classify(
        &sentence("Brief mention only."),
        &toy_centroids(),
        &provider,
        &config,
    )
    .unwrap();

    assert_eq!(record.label, Label::Irrelevant);
    assert_eq!(record.gate, GateDecision::TooShort);
    assert_eq!(provider.calls(), 0);
}

#[test]
fn disabled_gate_embeds_everything() {
    let provider = FixtureProvider::new();
    let config = ClassifyConfig {
        two_stage_gate: false,
        ..Default::default()
    };

    let record = classify(
        &sentence("Brief mention only."),
        &toy_centroids(),
        &provider,
        &config,
    )
    .unwrap();

    assert_eq!(record.gate, GateDecision::Passed);
    assert_eq!(provider.calls(), 1);
}

// ---- Boosts and margin rule ----

#[test]
fn numeric_operational_cue_flips_close_call_to_actionable() {
    // Raw centroid similarity slightly favors Speculative; the boost from
    // the numeric/operational-verb cue plus the margin rule lands
    // Actionable.
    let text = "We deployed an AI fraud-detection model that cut false positives by 30%.";
    let provider = FixtureProvider::new().with(text, unit_embedding(0.50, 0.52));
    let config = ClassifyConfig::default();

    let record = classify(&sentence(text), &toy_centroids(), &provider, &config).unwrap();

    assert_eq!(record.label, Label::Actionable);
    assert!(record.scores.actionable > 0.52, "boost applied to actionable");
    assert_eq!(provider.calls(), 1);
}

#[test]
fn modal_language_inside_margin_prefers_speculative() {
    let text = "We plan to adopt machine learning across our billing workflows.";
    let provider = FixtureProvider::new().with(text, unit_embedding(0.52, 0.50));
    let config = ClassifyConfig {
        rule_boosts: false,
        ..Default::default()
    };

    let record = classify(&sentence(text), &toy_centroids(), &provider, &config).unwrap();

    assert_eq!(record.label, Label::Speculative);
}

#[test]
fn wide_margin_ignores_cues() {
    let text = "We plan to adopt machine learning across our billing workflows.";
    let provider = FixtureProvider::new().with(text, unit_embedding(0.80, 0.10));
    let config = ClassifyConfig {
        rule_boosts: false,
        ..Default::default()
    };

    let record = classify(&sentence(text), &toy_centroids(), &provider, &config).unwrap();

    assert_eq!(record.label, Label::Actionable);
}

// ---- Determinism and replay ----

#[test]
fn classification_is_deterministic() {
    let text = "Our platform operates forecasting models in production for retail demand.";
    let provider = FixtureProvider::new().with(text, unit_embedding(0.7, 0.3));
    let config = ClassifyConfig::default();
    let centroids = toy_centroids();

    let first = classify(&sentence(text), &centroids, &provider, &config).unwrap();
    let second = classify(&sentence(text), &centroids, &provider, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn replaying_stored_records_reproduces_labels() {
    let config = ClassifyConfig::default();
    let centroids = toy_centroids();
    let texts = [
        "We deployed an AI fraud-detection model that cut false positives by 30%.",
        "We plan to adopt machine learning across our billing workflows.",
        "We offer consulting, including risk, compliance, privacy, \
         data security, and artificial intelligence advisory services.",
        "Our platform operates forecasting models in production for retail demand.",
        "Too short.",
    ];
    let provider = FixtureProvider::new();

    for text in texts {
        let record = classify(&sentence(text), &centroids, &provider, &config).unwrap();
        assert_eq!(
            replay(&record, &config),
            record.label,
            "replay must reproduce the stored label for: {text}"
        );
    }
}

// ---- Error conditions ----

#[test]
fn empty_text_yields_embedding_error() {
    let provider = FixtureProvider::new();
    let config = ClassifyConfig {
        two_stage_gate: false,
        ..Default::default()
    };

    let result = classify(&sentence("   "), &toy_centroids(), &provider, &config);
    assert!(matches!(result, Err(EmbeddingError::EmptyInput)));
}

#[test]
fn dimension_mismatch_is_surfaced() {
    let text = "This embedding has the wrong shape for the reference data.";
    let provider = FixtureProvider::new().with(text, vec![0.1, 0.2]);
    let config = ClassifyConfig::default();

    let result = classify(&sentence(text), &toy_centroids(), &provider, &config);
    assert!(matches!(
        result,
        Err(EmbeddingError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    ));
}
