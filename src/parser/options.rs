//! Parsing options and configuration.

use crate::detect::Language;

/// Options for parsing literate source files.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Force a language instead of detecting it from the file extension
    pub language: Option<Language>,

    /// Lift leading `#` comment lines into segment headings
    pub extract_headings: bool,

    /// Treat a `#!` first line as code
    pub shebang_as_code: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the source language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Enable or disable heading extraction.
    pub fn with_headings(mut self, extract: bool) -> Self {
        self.extract_headings = extract;
        self
    }

    /// Enable or disable shebang handling.
    pub fn with_shebang_as_code(mut self, enabled: bool) -> Self {
        self.shebang_as_code = enabled;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            language: None,
            extract_headings: true,
            shebang_as_code: true,
        }
    }
}
