//! Source language detection.
//!
//! The language of a source file decides which single-line comment marker
//! separates prose from code, and which hint is written on fenced code
//! blocks when highlighting is requested.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A source language understood by the line classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    Shell,
    Ruby,
    Yaml,
    Toml,
    Rust,
    JavaScript,
    TypeScript,
    Go,
    C,
    Cpp,
    Java,
    Sql,
    Lua,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 14] = [
        Language::Python,
        Language::Shell,
        Language::Ruby,
        Language::Yaml,
        Language::Toml,
        Language::Rust,
        Language::JavaScript,
        Language::TypeScript,
        Language::Go,
        Language::C,
        Language::Cpp,
        Language::Java,
        Language::Sql,
        Language::Lua,
    ];

    /// Single-line comment marker.
    pub fn comment_marker(&self) -> &'static str {
        match self {
            Language::Python
            | Language::Shell
            | Language::Ruby
            | Language::Yaml
            | Language::Toml => "#",
            Language::Rust
            | Language::JavaScript
            | Language::TypeScript
            | Language::Go
            | Language::C
            | Language::Cpp
            | Language::Java => "//",
            Language::Sql | Language::Lua => "--",
        }
    }

    /// Comment markers recognized at the start of a line, longest first.
    ///
    /// Doc-comment variants (`///`, `//!`, `---`) count as the same kind of
    /// comment as the plain marker.
    pub fn comment_markers(&self) -> &'static [&'static str] {
        match self.comment_marker() {
            "//" => &["///", "//!", "//"],
            "--" if *self == Language::Lua => &["---", "--"],
            "--" => &["--"],
            _ => &["#"],
        }
    }

    /// The comment marker that opens `text`, if any.
    ///
    /// `text` must already have its indentation removed.
    pub fn marker_of(&self, text: &str) -> Option<&'static str> {
        self.comment_markers()
            .iter()
            .copied()
            .find(|marker| text.starts_with(marker))
    }

    /// Language hint written after an opening code fence.
    pub fn hint(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Shell => "bash",
            Language::Ruby => "ruby",
            Language::Yaml => "yaml",
            Language::Toml => "toml",
            Language::Rust => "rust",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Go => "go",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Sql => "sql",
            Language::Lua => "lua",
        }
    }

    /// File extensions (lowercase, without the dot).
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py", "pyw"],
            Language::Shell => &["sh", "bash"],
            Language::Ruby => &["rb"],
            Language::Yaml => &["yml", "yaml"],
            Language::Toml => &["toml"],
            Language::Rust => &["rs"],
            Language::JavaScript => &["js", "mjs"],
            Language::TypeScript => &["ts"],
            Language::Go => &["go"],
            Language::C => &["c", "h"],
            Language::Cpp => &["cpp", "hpp", "cc"],
            Language::Java => &["java"],
            Language::Sql => &["sql"],
            Language::Lua => &["lua"],
        }
    }

    /// Whether a `#!` interpreter line can open files of this language.
    pub fn allows_shebang(&self) -> bool {
        self.comment_marker() == "#"
    }

    /// Look up a language by file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hint())
    }
}

/// Detect the language of a source file from its extension.
///
/// Files with an unknown or missing extension are treated as Python.
///
/// # Example
/// ```
/// use litdoc::detect::{detect_language, Language};
///
/// assert_eq!(detect_language("src/main.rs"), Language::Rust);
/// assert_eq!(detect_language("README"), Language::Python);
/// ```
pub fn detect_language<P: AsRef<Path>>(path: P) -> Language {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .and_then(Language::from_extension)
        .unwrap_or_default()
}
