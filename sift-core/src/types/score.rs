//! Per-label similarity scores.

use serde::{Deserialize, Serialize};

use super::Label;

/// Three similarity scores, one per label.
///
/// Raw values are cosine similarities in [-1, 1]; additive rule boosts may
/// push them outside that range. Not clamped, since only relative ordering
/// and margin matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub actionable: f32,
    pub speculative: f32,
    pub irrelevant: f32,
}

impl ScoreVector {
    pub fn new(actionable: f32, speculative: f32, irrelevant: f32) -> Self {
        Self {
            actionable,
            speculative,
            irrelevant,
        }
    }

    pub fn get(&self, label: Label) -> f32 {
        match label {
            Label::Actionable => self.actionable,
            Label::Speculative => self.speculative,
            Label::Irrelevant => self.irrelevant,
        }
    }

    pub fn add(&mut self, label: Label, delta: f32) {
        match label {
            Label::Actionable => self.actionable += delta,
            Label::Speculative => self.speculative += delta,
            Label::Irrelevant => self.irrelevant += delta,
        }
    }

    /// Label with the greatest score, ties resolved in `Label::all()` order.
    pub fn argmax(&self) -> Label {
        let mut best = Label::Actionable;
        for &label in &Label::all()[1..] {
            if self.get(label) > self.get(best) {
                best = label;
            }
        }
        best
    }

    /// Greater of the Actionable and Speculative scores, Actionable on ties.
    pub fn argmax_actionable_speculative(&self) -> Label {
        if self.actionable >= self.speculative {
            Label::Actionable
        } else {
            Label::Speculative
        }
    }
}
