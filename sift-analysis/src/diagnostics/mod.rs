//! Diagnostics reporter: accuracy, macro-F1, confusion matrix, and the
//! failure taxonomy over held-out results.
//!
//! Pure computation; serialization to a persisted report is the caller's
//! concern.

use serde::{Deserialize, Serialize};
use sift_core::types::Label;

/// Default thresholds for per-file distribution pathology flags.
pub const PATHOLOGY_IRRELEVANT_THRESHOLD: f64 = 0.99;
pub const PATHOLOGY_SINGLE_CLASS_THRESHOLD: f64 = 0.95;

/// 3×3 confusion matrix over the labels, gold on rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: [[usize; 3]; 3],
}

impl ConfusionMatrix {
    pub fn record(&mut self, gold: Label, predicted: Label) {
        self.counts[gold.index()][predicted.index()] += 1;
    }

    pub fn get(&self, gold: Label, predicted: Label) -> usize {
        self.counts[gold.index()][predicted.index()]
    }

    /// Gold-row total for a label.
    pub fn gold_total(&self, label: Label) -> usize {
        self.counts[label.index()].iter().sum()
    }

    /// Predicted-column total for a label.
    pub fn predicted_total(&self, label: Label) -> usize {
        self.counts.iter().map(|row| row[label.index()]).sum()
    }
}

/// One of the six ordered mislabel transitions, e.g. `A->S`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCount {
    pub transition: String,
    pub gold: Label,
    pub predicted: Label,
    pub count: usize,
}

/// Summary returned by [`summarize`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsSummary {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub macro_f1: f64,
    pub confusion: ConfusionMatrix,
    /// All six ordered mislabel transitions, zero counts included.
    pub taxonomy: Vec<TransitionCount>,
}

/// Compare gold and predicted label sequences.
///
/// The slices are parallel arrays; callers are responsible for aligning
/// them. Accuracy = correct / total; macro-F1 is the unweighted mean of
/// per-label F1.
pub fn summarize(gold: &[Label], predicted: &[Label]) -> DiagnosticsSummary {
    assert_eq!(
        gold.len(),
        predicted.len(),
        "gold and predicted label sequences must align"
    );

    let mut confusion = ConfusionMatrix::default();
    for (&g, &p) in gold.iter().zip(predicted) {
        confusion.record(g, p);
    }

    let total = gold.len();
    let correct = Label::all()
        .iter()
        .map(|&label| confusion.get(label, label))
        .sum();
    let accuracy = if total > 0 {
        correct as f64 / total as f64
    } else {
        0.0
    };

    let macro_f1 = Label::all()
        .iter()
        .map(|&label| f1(&confusion, label))
        .sum::<f64>()
        / Label::all().len() as f64;

    let mut taxonomy = Vec::with_capacity(6);
    for &g in Label::all() {
        for &p in Label::all() {
            if g != p {
                taxonomy.push(TransitionCount {
                    transition: format!("{}->{}", g.short(), p.short()),
                    gold: g,
                    predicted: p,
                    count: confusion.get(g, p),
                });
            }
        }
    }

    DiagnosticsSummary {
        total,
        correct,
        accuracy,
        macro_f1,
        confusion,
        taxonomy,
    }
}

fn f1(confusion: &ConfusionMatrix, label: Label) -> f64 {
    let tp = confusion.get(label, label) as f64;
    let predicted = confusion.predicted_total(label) as f64;
    let gold = confusion.gold_total(label) as f64;
    let precision = if predicted > 0.0 { tp / predicted } else { 0.0 };
    let recall = if gold > 0.0 { tp / gold } else { 0.0 };
    if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    }
}

/// Flag pathological per-file label distributions.
///
/// Shares are fractions of the file's sentences carrying each label.
pub fn flag_distribution_pathologies(
    actionable_share: f64,
    speculative_share: f64,
    irrelevant_share: f64,
    irrelevant_threshold: f64,
    single_class_threshold: f64,
) -> Vec<String> {
    let mut reasons = Vec::new();
    if irrelevant_share >= irrelevant_threshold {
        reasons.push(format!("I_share>={irrelevant_threshold:.2}"));
    }
    let max_share = actionable_share
        .max(speculative_share)
        .max(irrelevant_share);
    if max_share >= single_class_threshold {
        reasons.push(format!("single_class_share>={single_class_threshold:.2}"));
    }
    reasons
}
