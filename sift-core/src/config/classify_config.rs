//! Classification engine configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for the two-stage classification engine.
///
/// The boost magnitudes and listy-heuristic thresholds are calibration
/// data, tuned empirically. They are configuration, not design
/// invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Sentences with fewer tokens are gated Irrelevant.
    pub min_tokens: usize,
    /// Enable the Stage-0 fast rejection gate.
    pub two_stage_gate: bool,
    /// Enable lexical score boosts after centroid scoring.
    pub rule_boosts: bool,
    /// Actionable/Speculative margin below which the tie-break applies.
    pub tau: f32,
    /// Additive Irrelevant boost when both A and S scores are weak and
    /// listy cues matched without triggering the hard gate.
    pub eps_irrelevant: f32,
    /// Additive Actionable boost for operational-verb / numeric cues.
    pub actionable_boost: f32,
    /// Additive Speculative boost for modal / future-intent cues.
    pub speculative_boost: f32,
    /// Absolute score below which A and S are both considered weak.
    pub weak_score_ceiling: f32,
    /// Fraction of comma-separated segments that must contain a category
    /// term for the list-density gate to fire.
    pub listy_category_ratio: f32,
    /// Minimum comma count before list density is evaluated at all.
    pub listy_min_commas: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            min_tokens: 6,
            two_stage_gate: true,
            rule_boosts: true,
            tau: 0.07,
            eps_irrelevant: 0.03,
            actionable_boost: 0.08,
            speculative_boost: 0.06,
            weak_score_ceiling: 0.20,
            listy_category_ratio: 0.5,
            listy_min_commas: 2,
        }
    }
}

impl ClassifyConfig {
    /// Validate thresholds. Called at run start, before any file is
    /// touched, so a bad value can never produce a partially-applied run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_tokens == 0 {
            return Err(ConfigError::ZeroMinTokens);
        }
        for (name, value) in [
            ("tau", self.tau),
            ("eps_irrelevant", self.eps_irrelevant),
            ("actionable_boost", self.actionable_boost),
            ("speculative_boost", self.speculative_boost),
            ("weak_score_ceiling", self.weak_score_ceiling),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteThreshold { name, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeThreshold { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.listy_category_ratio) {
            return Err(ConfigError::RatioOutOfRange {
                value: self.listy_category_ratio,
            });
        }
        Ok(())
    }
}
