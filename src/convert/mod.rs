//! Single-file conversion.
//!
//! [`convert_file`] is the one entry point shared by batch builds and the
//! watch loop: read a source file, parse it, render Markdown and replace
//! the output file.
//!
//! # Example
//!
//! ```no_run
//! use litdoc::convert::convert_file;
//! use litdoc::RenderOptions;
//!
//! fn main() -> litdoc::Result<()> {
//!     let options = RenderOptions::new().with_highlights(true);
//!     let result = convert_file("pkg/cli.py", "docs/cli.md", &options)?;
//!     println!("{} code blocks", result.stats.code_segments);
//!     Ok(())
//! }
//! ```

mod write;

pub use write::write_atomic;

use crate::error::Result;
use crate::parser::ParseOptions;
use crate::render::{MarkdownRenderer, RenderOptions, RenderResult, RenderStats};
use std::path::{Path, PathBuf};

/// Result of converting one file.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Source file that was read
    pub input: PathBuf,

    /// Output file that was written
    pub output: PathBuf,

    /// Rendering statistics
    pub stats: RenderStats,

    /// Bytes written to the output file
    pub bytes_written: usize,
}

/// Converts literate source files to Markdown files.
#[derive(Debug, Clone, Default)]
pub struct FileConverter {
    parse_options: ParseOptions,
}

impl FileConverter {
    /// Create a converter with default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Render a source file to a Markdown string without writing it.
    pub fn render(&self, input: &Path, options: &RenderOptions) -> Result<(String, RenderStats)> {
        let result = self.render_result(input, options)?;
        Ok((result.content, result.stats))
    }

    fn render_result(&self, input: &Path, options: &RenderOptions) -> Result<RenderResult> {
        let doc = crate::parse_file_with_options(input, self.parse_options.clone())?;
        MarkdownRenderer::new(options.clone()).render_with_stats(&doc)
    }

    /// Convert `input` and fully replace `output` with the rendered text.
    ///
    /// Missing parent directories of `output` are created. On failure the
    /// previous output file is left untouched.
    pub fn convert(
        &self,
        input: &Path,
        output: &Path,
        options: &RenderOptions,
    ) -> Result<ConvertResult> {
        let result = self.render_result(input, options)?;
        write_atomic(output, &result.content)?;

        log::info!("Converted {} -> {}", input.display(), output.display());

        Ok(ConvertResult {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            stats: result.stats,
            bytes_written: result.content_len(),
        })
    }
}

/// Convert one source file to a Markdown file.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &RenderOptions,
) -> Result<ConvertResult> {
    FileConverter::new().convert(input.as_ref(), output.as_ref(), options)
}
