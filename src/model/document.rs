//! Document-level types.

use super::{Heading, Segment};
use crate::detect::Language;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A parsed literate source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Path of the originating source file
    pub path: PathBuf,

    /// Source language the document was classified with
    pub language: Language,

    /// Alternating comment and code segments
    pub segments: Vec<Segment>,

    /// Whether any segment carries a heading
    pub has_headings: bool,
}

impl Document {
    /// Create a new empty document.
    pub fn new(path: impl Into<PathBuf>, language: Language) -> Self {
        Self {
            path: path.into(),
            language,
            segments: Vec::new(),
            has_headings: false,
        }
    }

    /// Check if the document has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Iterate over every extracted heading in order.
    pub fn headings(&self) -> impl Iterator<Item = &Heading> {
        self.segments.iter().filter_map(|s| s.heading.as_ref())
    }

    /// Title of the first segment, if it has one.
    pub fn leading_title(&self) -> Option<&str> {
        self.segments.first().and_then(Segment::title)
    }

    /// File name of the source, used for synthesized titles.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Total number of source lines kept in segments.
    pub fn line_count(&self) -> usize {
        self.segments.iter().map(Segment::line_count).sum()
    }
}
