//! Segment types.

use super::{Line, LineKind};
use serde::{Deserialize, Serialize};

/// Effective kind of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Comment,
    Code,
}

impl SegmentKind {
    /// The segment kind a non-blank line opens, if any.
    pub fn of(kind: LineKind) -> Option<SegmentKind> {
        match kind {
            LineKind::Comment => Some(SegmentKind::Comment),
            LineKind::Code => Some(SegmentKind::Code),
            LineKind::Blank => None,
        }
    }
}

/// A section heading lifted from the first line of a comment segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (count of leading `#`)
    pub level: u8,

    /// Heading text, trimmed
    pub text: String,

    /// The comment line the heading was taken from
    pub line: Line,
}

/// A contiguous run of source lines of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment kind
    pub kind: SegmentKind,

    /// Title extracted from a leading heading marker
    pub heading: Option<Heading>,

    /// Body lines in source order (the heading line is not included)
    pub lines: Vec<Line>,
}

impl Segment {
    /// Open a new segment starting with the given line.
    pub fn new(kind: SegmentKind, first: Line) -> Self {
        Self {
            kind,
            heading: None,
            lines: vec![first],
        }
    }

    /// Append a line to the segment.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Check if this is a comment segment.
    pub fn is_comment(&self) -> bool {
        self.kind == SegmentKind::Comment
    }

    /// Check if this is a code segment.
    pub fn is_code(&self) -> bool {
        self.kind == SegmentKind::Code
    }

    /// Title text, if a heading was extracted.
    pub fn title(&self) -> Option<&str> {
        self.heading.as_ref().map(|h| h.text.as_str())
    }

    /// Number of source lines covered, heading included.
    pub fn line_count(&self) -> usize {
        self.lines.len() + usize::from(self.heading.is_some())
    }

    /// All source lines in order, heading included.
    pub fn all_lines(&self) -> impl Iterator<Item = &Line> {
        self.heading.iter().map(|h| &h.line).chain(self.lines.iter())
    }

    /// Body lines with leading and trailing blank lines removed.
    pub fn trimmed_lines(&self) -> &[Line] {
        let start = self
            .lines
            .iter()
            .position(|l| !l.is_blank())
            .unwrap_or(self.lines.len());
        let end = self
            .lines
            .iter()
            .rposition(|l| !l.is_blank())
            .map_or(start, |i| i + 1);
        &self.lines[start..end]
    }
}
