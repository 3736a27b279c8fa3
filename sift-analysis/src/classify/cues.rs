//! Lexical cue sets: operational verbs, modal/future-intent phrases,
//! listy connectives, numeric tokens, and category terms.
//!
//! The word lists are calibration data mined from labeled corpora, not
//! design invariants. The thresholds that interpret them live in
//! `ClassifyConfig`.

use once_cell::sync::Lazy;
use regex::Regex;
use sift_core::config::ClassifyConfig;

use crate::mentions::KeywordSet;

static CUES: Lazy<CueSets> = Lazy::new(CueSets::compile);

/// Generic category nouns that populate boilerplate laundry lists.
const CATEGORY_TERMS: &[&str] = &[
    "internet",
    "e-commerce",
    "web services",
    "devices",
    "advertising",
    "privacy",
    "data security",
    "data protection",
    "tax",
    "employment",
    "antitrust",
    "tariff",
    "robotics",
    "virtual reality",
    "blockchain",
    "cloud",
    "edge computing",
    "compliance",
    "consulting",
    "risk",
    "analytics",
    "advisory",
    "logistics",
];

/// Listy heuristic outcome for one sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListySignal {
    /// Strong enough to reject at the gate.
    pub hard: bool,
    /// Listy cues present but below the gate threshold; feeds the
    /// Irrelevant epsilon boost.
    pub soft: bool,
}

/// Compiled cue matchers, built once per process.
pub struct CueSets {
    action_verbs: Regex,
    modals: Regex,
    listy_connectives: Regex,
    numeric: Regex,
    categories: KeywordSet,
}

impl CueSets {
    pub fn global() -> &'static CueSets {
        &CUES
    }

    fn compile() -> Self {
        Self {
            action_verbs: Regex::new(
                r"(?i)\b(launch(?:ed|es)?|deploy(?:ed|s|ing)?|operat(?:e|es|ing)|implement(?:ed|s|ing)?|build(?:s|ing)?|built|appl(?:y|ies|ied|ying)|deliver(?:ed|ing|s)?|improv(?:e|ed|es|ing)|optimiz(?:e|es|ed|ing)|us(?:e|es|ed|ing)|serv(?:e|es|ing)|support(?:s|ed|ing)?|reduc(?:e|ed|ing)|cut|develop(?:ed|s)?|run(?:s|ning)?|recommend(?:s|ing)?|embed(?:ded|s)?|roll(?:ed)?\s+out|in\s+production)\b",
            )
            .expect("action verb pattern"),
            modals: Regex::new(
                r"(?i)\b(may|might|could|will|would|plan(?:s|ned)?\s+to|planning\s+to|intend(?:s|ed)?\s+to|aims?\s+to|expect(?:s|ed)?\s+to|anticipate|seeks?\s+to|hope\s+to|explor(?:e|es|ing)|evaluat(?:e|es|ing))\b",
            )
            .expect("modal pattern"),
            listy_connectives: Regex::new(
                r"(?i)\b(including|such\s+as|as\s+well\s+as|among\s+others?|and\s+other)\b",
            )
            .expect("listy connective pattern"),
            numeric: Regex::new(r"\d").expect("numeric pattern"),
            categories: KeywordSet::from_terms(
                CATEGORY_TERMS.iter().map(|s| s.to_string()).collect(),
            ),
        }
    }

    /// Operational-verb or numeric cue: concrete, deployed language.
    pub fn has_actionable(&self, text: &str) -> bool {
        self.action_verbs.is_match(text) || self.numeric.is_match(text)
    }

    /// Modal or future-intent cue.
    pub fn has_speculative(&self, text: &str) -> bool {
        self.modals.is_match(text)
    }

    /// Evaluate the listy heuristics.
    ///
    /// Hard signal: the sentence is dominated by comma-separated category
    /// terms, or carries a listy connective with no operational verb and
    /// no numeric token. Soft signal: a connective is present at all.
    pub fn listy(&self, text: &str, config: &ClassifyConfig) -> ListySignal {
        let connective = self.listy_connectives.is_match(text);
        let has_verb = self.action_verbs.is_match(text);
        let has_numeric = self.numeric.is_match(text);

        let commas = text.matches(',').count();
        let dense = if commas >= config.listy_min_commas {
            let segments: Vec<&str> = text.split(',').collect();
            let hits = segments
                .iter()
                .filter(|segment| self.categories.matches(segment))
                .count();
            hits as f32 / segments.len() as f32 >= config.listy_category_ratio
        } else {
            false
        };

        ListySignal {
            hard: dense || (connective && !has_verb && !has_numeric),
            soft: connective || commas >= config.listy_min_commas,
        }
    }
}
