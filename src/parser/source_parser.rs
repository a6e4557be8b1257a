//! Literate source parser.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::detect::detect_language;
use crate::error::{Error, Result};
use crate::model::{Document, SourceLine};

use super::options::ParseOptions;
use super::{extract_headings, segment, LineClassifier};

/// Literate source parser.
///
/// Runs the classifier, segmenter and heading extractor over one file's
/// text and produces an immutable [`Document`].
pub struct SourceParser {
    path: PathBuf,
    text: String,
    options: ParseOptions,
}

impl SourceParser {
    /// Open a source file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a source file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Ok(Self::from_text_with_options(path, text, options))
    }

    /// Parse source text that is already in memory.
    ///
    /// `path` is only used for language detection and titles.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self::from_text_with_options(path, text, ParseOptions::default())
    }

    /// Parse in-memory source text with custom options.
    pub fn from_text_with_options(
        path: impl Into<PathBuf>,
        text: impl Into<String>,
        options: ParseOptions,
    ) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            options,
        }
    }

    /// Parse source text from a reader.
    pub fn from_reader<R: Read>(path: impl Into<PathBuf>, mut reader: R) -> Result<Self> {
        let path = path.into();
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::read(&path, e))?;
        Ok(Self::from_text(path, text))
    }

    /// Parse the source and return a structured Document.
    pub fn parse(&self) -> Result<Document> {
        let language = self
            .options
            .language
            .unwrap_or_else(|| detect_language(&self.path));

        let classifier =
            LineClassifier::new(language).with_shebang_as_code(self.options.shebang_as_code);
        let lines = classifier.classify_all(SourceLine::split(&self.text));

        let mut document = Document::new(&self.path, language);
        document.segments = segment(lines);
        if self.options.extract_headings {
            document.has_headings = extract_headings(&mut document.segments);
        }

        log::debug!(
            "Parsed {} as {}: {} segments, headings: {}",
            self.path.display(),
            language,
            document.segment_count(),
            document.has_headings
        );

        Ok(document)
    }
}
