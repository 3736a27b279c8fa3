//! Topic mention filter: keeps only sentences that mention a keyword or
//! phrase from a configured topic list.

use std::path::{Path, PathBuf};

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use sift_core::errors::ArtifactError;
use tracing::info;

/// A compiled, case-insensitive keyword/phrase matcher.
pub struct KeywordSet {
    terms: Vec<String>,
    matcher: AhoCorasick,
}

impl KeywordSet {
    /// Load keywords from a file, one term or phrase per line.
    ///
    /// `#` starts a comment; surrounding quotes are stripped; terms are
    /// lowercased and deduplicated preserving order.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        let set = Self::from_lines(raw.lines());
        info!(path = %path.display(), terms = set.terms.len(), "loaded topic keywords");
        Ok(set)
    }

    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut seen = rustc_hash::FxHashSet::default();
        let mut terms = Vec::new();
        for raw in lines {
            let mut line = raw.split('#').next().unwrap_or("").trim();
            if (line.starts_with('"') && line.ends_with('"') && line.len() >= 2)
                || (line.starts_with('\'') && line.ends_with('\'') && line.len() >= 2)
            {
                line = line[1..line.len() - 1].trim();
            }
            if line.is_empty() {
                continue;
            }
            let term = line.to_lowercase();
            if seen.insert(term.clone()) {
                terms.push(term);
            }
        }
        Self::from_terms(terms)
    }

    pub fn from_terms(terms: Vec<String>) -> Self {
        let matcher = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&terms)
            .expect("keyword automaton");
        Self { terms, matcher }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when the sentence mentions any keyword at a word-ish boundary.
    ///
    /// Boundaries are alphanumeric transitions, so `AI` does not match
    /// inside `maintain` but `GPT-4` still matches as a whole token.
    pub fn matches(&self, sentence: &str) -> bool {
        let bytes = sentence.as_bytes();
        self.matcher.find_iter(sentence).any(|m| {
            let before_ok = m.start() == 0 || !bytes[m.start() - 1].is_ascii_alphanumeric();
            let after_ok = m.end() == bytes.len() || !bytes[m.end()].is_ascii_alphanumeric();
            before_ok && after_ok
        })
    }

    /// Keep only sentences that mention the topic.
    ///
    /// Very short and number-only lines are rejected before matching.
    pub fn filter(&self, sentences: &[String]) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }
        sentences
            .iter()
            .filter(|s| {
                let trimmed = s.trim();
                trimmed.len() >= 4
                    && !trimmed.chars().all(|c| c.is_ascii_digit())
                    && self.matches(trimmed)
            })
            .map(|s| s.trim().to_string())
            .collect()
    }
}
