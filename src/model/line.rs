//! Line-level types.

use serde::{Deserialize, Serialize};

/// One physical line of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    /// Line number (1-indexed)
    pub number: usize,

    /// Line text without its terminator
    pub text: String,
}

impl SourceLine {
    /// Create a new source line.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Split source text into numbered lines.
    ///
    /// Both `\n` and `\r\n` terminators are accepted. A trailing terminator
    /// does not produce an extra empty line.
    pub fn split(text: &str) -> Vec<SourceLine> {
        text.lines()
            .enumerate()
            .map(|(i, line)| SourceLine::new(i + 1, line))
            .collect()
    }

    /// Leading whitespace of the line.
    pub fn indent(&self) -> &str {
        let trimmed = self.text.trim_start();
        &self.text[..self.text.len() - trimmed.len()]
    }
}

/// Classification of a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Comment,
    Code,
    Blank,
}

/// A classified source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The original line
    pub source: SourceLine,

    /// Line classification
    pub kind: LineKind,

    /// Renderable text: prose for comments, verbatim text otherwise
    pub content: String,
}

impl Line {
    /// Create a comment line with its stripped prose content.
    pub fn comment(source: SourceLine, content: impl Into<String>) -> Self {
        Self {
            source,
            kind: LineKind::Comment,
            content: content.into(),
        }
    }

    /// Create a code line; the content is the verbatim source text.
    pub fn code(source: SourceLine) -> Self {
        let content = source.text.clone();
        Self {
            source,
            kind: LineKind::Code,
            content,
        }
    }

    /// Create a blank line.
    pub fn blank(source: SourceLine) -> Self {
        let content = source.text.clone();
        Self {
            source,
            kind: LineKind::Blank,
            content,
        }
    }

    /// Original line number (1-indexed).
    pub fn number(&self) -> usize {
        self.source.number
    }

    /// Check if this is a blank line.
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }
}
