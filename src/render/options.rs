//! Rendering options and configuration.

use serde::{Deserialize, Serialize};

/// Options for rendering a literate document.
///
/// Every flag defaults to off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Place each code block directly beneath its prose, without a blank line
    #[serde(default)]
    pub inline: bool,

    /// Synthesize an H1 from the file name when the document has no leading title
    #[serde(default)]
    pub title: bool,

    /// Annotate code blocks with their starting source line number
    #[serde(default)]
    pub linenums: bool,

    /// Tag code blocks with a language hint
    #[serde(default)]
    pub highlights: bool,

    /// Emit a table of contents when the document has headings
    #[serde(default)]
    pub toc: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable inline layout.
    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Enable or disable synthesized titles.
    pub fn with_title(mut self, title: bool) -> Self {
        self.title = title;
        self
    }

    /// Enable or disable line number annotations.
    pub fn with_linenums(mut self, linenums: bool) -> Self {
        self.linenums = linenums;
        self
    }

    /// Enable or disable language hints on code blocks.
    pub fn with_highlights(mut self, highlights: bool) -> Self {
        self.highlights = highlights;
        self
    }

    /// Enable or disable the table of contents.
    pub fn with_toc(mut self, toc: bool) -> Self {
        self.toc = toc;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_inline(true)
            .with_linenums(true)
            .with_highlights(true);

        assert!(options.inline);
        assert!(options.linenums);
        assert!(options.highlights);
        assert!(!options.title);
        assert!(!options.toc);
    }

    #[test]
    fn test_render_options_default_off() {
        let options = RenderOptions::default();
        assert_eq!(
            options,
            RenderOptions {
                inline: false,
                title: false,
                linenums: false,
                highlights: false,
                toc: false,
            }
        );
    }
}
