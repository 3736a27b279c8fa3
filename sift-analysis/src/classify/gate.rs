//! Stage-0 rejection gate.
//!
//! Rejecting here short-circuits the rest of the pipeline: no embedding
//! call is made, which is what makes the gate matter for throughput.

use sift_core::config::ClassifyConfig;
use sift_core::types::GateDecision;

use super::cues::CueSets;

/// Evaluate the gate for one sentence.
///
/// When the gate is disabled every sentence passes.
pub fn evaluate(text: &str, config: &ClassifyConfig) -> GateDecision {
    if !config.two_stage_gate {
        return GateDecision::Passed;
    }

    if text.split_whitespace().count() < config.min_tokens {
        return GateDecision::TooShort;
    }

    if CueSets::global().listy(text, config).hard {
        return GateDecision::Listy;
    }

    GateDecision::Passed
}
