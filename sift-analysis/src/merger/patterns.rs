//! Layout-artifact patterns: page markers, table-of-contents lines,
//! bare numbers.

use regex::Regex;

/// Compiled boilerplate patterns for a document corpus.
///
/// A line is boilerplate when it carries no sentence content: page-number
/// markers like `- 12 -`, table-of-contents rows, and all-digit lines
/// left behind by layout extraction.
pub struct BoilerplatePatterns {
    page_marker: Regex,
    toc_row: Regex,
}

impl BoilerplatePatterns {
    pub fn new() -> Self {
        Self {
            // - 4 -, — 12 —, – 3 – ; tolerant of spacing
            page_marker: Regex::new(r"[\-\u{2013}\u{2014}]\s*\d+\s*[\-\u{2013}\u{2014}]")
                .expect("page marker pattern"),
            // "Item 1A. Risk Factors .... 17" style rows and dot leaders
            toc_row: Regex::new(r"(?i)^table\s+of\s+contents|\.{4,}\s*\d*\s*$")
                .expect("toc pattern"),
        }
    }

    /// True when the whole line is layout boilerplate and carries no
    /// sentence content.
    pub fn is_boilerplate(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return true;
        }
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }
        if self.toc_row.is_match(trimmed) {
            return true;
        }
        // A page marker with nothing else around it
        if let Some(m) = self.page_marker.find(trimmed) {
            if trimmed[..m.start()].trim().is_empty() && trimmed[m.end()..].trim().is_empty() {
                return true;
            }
        }
        false
    }

    /// Strip a leading page marker from a continuation fragment.
    pub fn strip_leading_marker<'a>(&self, text: &'a str) -> &'a str {
        let trimmed = text.trim_start();
        if let Some(m) = self.page_marker.find(trimmed) {
            if m.start() == 0 {
                return trimmed[m.end()..].trim_start();
            }
        }
        trimmed
    }

    /// Strip a trailing page marker from an open accumulator.
    pub fn strip_trailing_marker<'a>(&self, text: &'a str) -> &'a str {
        let trimmed = text.trim_end();
        let mut last: Option<(usize, usize)> = None;
        for m in self.page_marker.find_iter(trimmed) {
            last = Some((m.start(), m.end()));
        }
        if let Some((start, end)) = last {
            if trimmed[end..].trim().is_empty() {
                return trimmed[..start].trim_end();
            }
        }
        trimmed
    }
}

impl Default for BoilerplatePatterns {
    fn default() -> Self {
        Self::new()
    }
}
