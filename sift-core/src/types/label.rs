//! The three semantic labels.

use serde::{Deserialize, Serialize};

/// Semantic label assigned to a topic-mention sentence.
///
/// Mutually exclusive, no total order, no numeric meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Concrete, deployed, operational claims.
    Actionable,
    /// Forward-looking intent, plans, modal language.
    Speculative,
    /// Boilerplate, laundry lists, generic mentions.
    Irrelevant,
}

impl Label {
    /// All labels, in the fixed order used for fingerprints and matrices.
    pub fn all() -> &'static [Label; 3] {
        &[Self::Actionable, Self::Speculative, Self::Irrelevant]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Actionable => "Actionable",
            Self::Speculative => "Speculative",
            Self::Irrelevant => "Irrelevant",
        }
    }

    /// Short code used in failure-taxonomy transition keys.
    pub fn short(&self) -> &'static str {
        match self {
            Self::Actionable => "A",
            Self::Speculative => "S",
            Self::Irrelevant => "I",
        }
    }

    /// Index into the fixed `all()` order.
    pub fn index(&self) -> usize {
        match self {
            Self::Actionable => 0,
            Self::Speculative => 1,
            Self::Irrelevant => 2,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
