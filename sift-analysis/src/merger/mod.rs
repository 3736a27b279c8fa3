//! Fragment merger: repairs sentence boundaries broken by document layout
//! artifacts (page numbers, bulleted lists).
//!
//! Pure function over an ordered sentence stream, no I/O. The merger only
//! repairs the specific damage layout extraction causes; it is not a
//! general sentence-boundary detector.

pub mod patterns;

use tracing::debug;

pub use patterns::BoilerplatePatterns;

/// Sentence-terminal punctuation.
const TERMINALS: [char; 3] = ['.', '?', '!'];

/// Repairs fragmented sentences by scanning the stream in order with a
/// single open accumulator.
pub struct FragmentMerger {
    patterns: BoilerplatePatterns,
}

impl FragmentMerger {
    pub fn new() -> Self {
        Self {
            patterns: BoilerplatePatterns::new(),
        }
    }

    /// Merge fragmented sentences back into complete ones.
    ///
    /// Boilerplate lines are dropped silently and never start, continue,
    /// or break a chain. An open accumulator at end of input is emitted
    /// as-is rather than discarded; partial content is never silently
    /// dropped.
    pub fn merge(&self, sentences: &[String]) -> Vec<String> {
        let mut out = Vec::with_capacity(sentences.len());
        let mut acc: Option<String> = None;
        let mut merges = 0usize;

        for raw in sentences {
            let line = raw.trim();
            if self.patterns.is_boilerplate(line) {
                continue;
            }

            match acc.take() {
                None => {
                    if is_complete(line) {
                        out.push(finalize(line));
                    } else {
                        acc = Some(line.to_string());
                    }
                }
                Some(open) => {
                    if self.is_continuation(line) {
                        let joined = self.join(&open, line);
                        merges += 1;
                        if is_complete(&joined) {
                            out.push(finalize(&joined));
                        } else {
                            // Chains continue indefinitely until a
                            // terminator is found or input ends.
                            acc = Some(joined);
                        }
                    } else {
                        // Chain broken: degrade to emitting the fragment
                        // unmerged, then restart at the current sentence.
                        out.push(open);
                        if is_complete(line) {
                            out.push(finalize(line));
                        } else {
                            acc = Some(line.to_string());
                        }
                    }
                }
            }
        }

        if let Some(open) = acc {
            out.push(open);
        }

        if merges > 0 {
            debug!(merges, input = sentences.len(), output = out.len(), "merged fragments");
        }
        out
    }

    /// A fragment continues an open chain when it starts where prose
    /// cannot: a lowercase letter ("and services ...", "it is ...") or a
    /// digit ("30% in the coming year."). Capitalized starts never
    /// continue a chain; emitted sentences are capitalized, so no second
    /// merge pass can find new joins.
    fn is_continuation(&self, line: &str) -> bool {
        let stripped = self.patterns.strip_leading_marker(line);
        stripped
            .chars()
            .next()
            .is_some_and(|c| (c.is_lowercase() && c.is_alphabetic()) || c.is_ascii_digit())
    }

    fn join(&self, open: &str, next: &str) -> String {
        let mut head = self.patterns.strip_trailing_marker(open).to_string();
        if head.ends_with(';') {
            head.pop();
            head.truncate(head.trim_end().len());
        }
        let tail = self.patterns.strip_leading_marker(next);
        format!("{} {}", head, tail)
    }
}

impl Default for FragmentMerger {
    fn default() -> Self {
        Self::new()
    }
}

/// A sentence is complete when it ends with terminal punctuation. A
/// trailing `;` marks a clause boundary, not a sentence end.
fn is_complete(line: &str) -> bool {
    let trimmed = line.trim_end();
    trimmed.ends_with(TERMINALS) && !trimmed.ends_with(';')
}

/// Capitalize the first letter and ensure terminal punctuation.
fn finalize(line: &str) -> String {
    let trimmed = line.trim();
    let mut out = String::with_capacity(trimmed.len() + 1);
    let mut chars = trimmed.chars();
    if let Some(first) = chars.next() {
        if first.is_lowercase() {
            out.extend(first.to_uppercase());
        } else {
            out.push(first);
        }
        out.push_str(chars.as_str());
    }
    if !out.ends_with(TERMINALS) {
        out.push('.');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(lines: &[&str]) -> Vec<String> {
        let merger = FragmentMerger::new();
        merger.merge(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn merges_page_split_sentence() {
        let merged = merge(&[
            "The Company continues to invest in automation to enhance its products — 4 —",
            " and services in the coming year.",
        ]);
        assert_eq!(merged.len(), 1);
        assert!(!merged[0].contains('—'));
        assert!(!merged[0].contains('4'));
        assert!(merged[0].starts_with("The Company"));
        assert!(merged[0].ends_with('.'));
    }

    #[test]
    fn complete_sentences_pass_through() {
        let lines = ["This sentence is complete and has no fragment."];
        assert_eq!(merge(&lines), lines);
    }

    #[test]
    fn boilerplate_between_fragments_does_not_break_the_chain() {
        let merged = merge(&[
            "Our platform supports forecasting",
            "12",
            "and recommendations across the retail business.",
        ]);
        assert_eq!(merged.len(), 1);
        assert!(!merged[0].contains("12"));
        assert!(merged[0].ends_with("business."));
    }

    #[test]
    fn trailing_semicolon_is_stripped_at_join() {
        let merged = merge(&["We operate two segments;", "each uses shared infrastructure."]);
        assert_eq!(merged.len(), 1);
        assert!(!merged[0].contains(';'));
    }

    #[test]
    fn chain_break_emits_fragment_unmerged() {
        let merged = merge(&[
            "an orphaned fragment without an end",
            "The next sentence stands alone.",
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], "an orphaned fragment without an end");
    }

    #[test]
    fn open_accumulator_is_flushed_at_end_of_input() {
        let merged = merge(&["A dangling start with no terminator"]);
        assert_eq!(merged, vec!["A dangling start with no terminator"]);
    }

    #[test]
    fn lowercase_start_is_capitalized_when_chain_completes() {
        let merged = merge(&["because of layout damage", "it is emitted capitalized."]);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].starts_with("Because"));
    }

    #[test]
    fn merge_is_idempotent_on_its_own_output() {
        let merger = FragmentMerger::new();
        let input: Vec<String> = [
            "Our models reduced review time — 7 —",
            " by a wide margin;",
            "and continue to improve.",
            "A complete sentence.",
            "trailing fragment with no end",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let once = merger.merge(&input);
        let twice = merger.merge(&once);
        assert_eq!(once, twice);
    }
}
