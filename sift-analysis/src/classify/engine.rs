//! Two-stage classification engine: gate → centroid scoring → lexical
//! boosts → margin tie-break.

use sift_core::config::ClassifyConfig;
use sift_core::errors::EmbeddingError;
use sift_core::types::{ClassificationRecord, GateDecision, Label, ScoreVector, Sentence};
use tracing::trace;

use super::cues::CueSets;
use super::gate;
use crate::centroids::CentroidSet;
use crate::embedding::EmbeddingProvider;

/// Classify one sentence.
///
/// Pure with respect to the inputs: for a fixed `CentroidSet`, provider,
/// and config, repeated calls on the same text produce identical records.
pub fn classify(
    sentence: &Sentence,
    centroids: &CentroidSet,
    provider: &dyn EmbeddingProvider,
    config: &ClassifyConfig,
) -> Result<ClassificationRecord, EmbeddingError> {
    let text = sentence.text.trim();

    let gate = gate::evaluate(text, config);
    if gate.rejected() {
        // Short-circuit: no embedding call for gated sentences.
        trace!(gate = ?gate, "gated without embedding");
        return Ok(ClassificationRecord {
            text: sentence.text.clone(),
            label: Label::Irrelevant,
            scores: ScoreVector::default(),
            gate,
            source: sentence.source.clone(),
        });
    }

    if text.is_empty() {
        return Err(EmbeddingError::EmptyInput);
    }

    let embedding = provider.embed(text)?;
    if embedding.len() != centroids.dimensions() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: centroids.dimensions(),
            actual: embedding.len(),
        });
    }

    let mut scores = centroids.similarity(&embedding);

    let cues = CueSets::global();
    let actionable_cue = cues.has_actionable(text);
    let speculative_cue = cues.has_speculative(text);

    if config.rule_boosts {
        if actionable_cue {
            scores.add(Label::Actionable, config.actionable_boost);
        }
        if speculative_cue {
            scores.add(Label::Speculative, config.speculative_boost);
        }
        // Weak-and-listy sentences that slipped past the hard gate lean
        // Irrelevant.
        let listy = cues.listy(text, config);
        if listy.soft
            && scores.actionable < config.weak_score_ceiling
            && scores.speculative < config.weak_score_ceiling
        {
            scores.add(Label::Irrelevant, config.eps_irrelevant);
        }
    }

    let label = decide(&scores, gate, speculative_cue, actionable_cue, config);
    trace!(label = %label, a = scores.actionable, s = scores.speculative, i = scores.irrelevant, "classified");

    Ok(ClassificationRecord {
        text: sentence.text.clone(),
        label,
        scores,
        gate,
        source: sentence.source.clone(),
    })
}

/// The decision rule, split out so persisted records can be audited:
/// replaying it on a stored ScoreVector and gate decision must reproduce
/// the stored label.
pub fn decide(
    scores: &ScoreVector,
    gate: GateDecision,
    speculative_cue: bool,
    actionable_cue: bool,
    config: &ClassifyConfig,
) -> Label {
    if gate.rejected() {
        return Label::Irrelevant;
    }

    if (scores.actionable - scores.speculative).abs() < config.tau {
        // Margin tie-break between the two substantive labels.
        if speculative_cue {
            Label::Speculative
        } else if actionable_cue {
            Label::Actionable
        } else {
            scores.argmax_actionable_speculative()
        }
    } else if config.two_stage_gate {
        // The gate already owns Irrelevant; pick between A and S.
        scores.argmax_actionable_speculative()
    } else {
        scores.argmax()
    }
}

/// Re-derive the label for a persisted record from its stored scores and
/// gate decision. Used by reproducibility audits.
pub fn replay(record: &ClassificationRecord, config: &ClassifyConfig) -> Label {
    let cues = CueSets::global();
    let text = record.text.trim();
    decide(
        &record.scores,
        record.gate,
        cues.has_speculative(text),
        cues.has_actionable(text),
        config,
    )
}
