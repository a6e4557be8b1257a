//! Line classification.
//!
//! Tags each physical line as comment, code or blank. The classifier never
//! merges or drops lines; deciding where blank lines belong is left to the
//! segmenter.

use crate::detect::Language;
use crate::model::{Line, SourceLine};

/// Classifies source lines for one language.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    language: Language,
    shebang_as_code: bool,
}

impl LineClassifier {
    /// Create a classifier for the given language.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            shebang_as_code: language.allows_shebang(),
        }
    }

    /// Enable or disable treating a `#!` first line as code.
    pub fn with_shebang_as_code(mut self, enabled: bool) -> Self {
        self.shebang_as_code = self.shebang_as_code && enabled;
        self
    }

    /// Classify a single line.
    pub fn classify(&self, source: SourceLine) -> Line {
        let trimmed = source.text.trim_start();

        if trimmed.is_empty() {
            return Line::blank(source);
        }

        if self.shebang_as_code && source.number == 1 && trimmed.starts_with("#!") {
            return Line::code(source);
        }

        match self.language.marker_of(trimmed) {
            Some(marker) => {
                let rest = &trimmed[marker.len()..];
                let content = rest.strip_prefix(' ').unwrap_or(rest).to_string();
                Line::comment(source, content)
            }
            None => Line::code(source),
        }
    }

    /// Classify every line, preserving order.
    pub fn classify_all(&self, lines: Vec<SourceLine>) -> Vec<Line> {
        lines.into_iter().map(|l| self.classify(l)).collect()
    }
}
