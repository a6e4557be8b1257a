//! # litdoc
//!
//! Literate source to Markdown conversion for Rust.
//!
//! This library reads source files whose comments double as documentation,
//! separates prose comments from code, and renders Markdown that alternates
//! narrative text with fenced code blocks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use litdoc::{parse_file, render};
//!
//! fn main() -> litdoc::Result<()> {
//!     // Parse a literate source file
//!     let doc = parse_file("pkg/cli.py")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default().with_highlights(true);
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Segmentation**: comment and code lines grouped into alternating blocks
//! - **Headings**: `# ## Title` comments become section headings
//! - **Layouts**: separated or inline prose/code flow
//! - **Annotations**: language hints and starting line numbers on code fences
//! - **Batches**: directory expansion with per-file failure reporting

pub mod batch;
pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use batch::{
    convert_all, convert_all_with, run_plan, BatchReport, ConversionJob, JobFailure, JobPlan,
    SourceEntry,
};
pub use config::{Config, LoadRequest};
pub use convert::{convert_file, ConvertResult, FileConverter};
pub use detect::{detect_language, Language};
pub use error::{Error, ErrorKind, Result};
pub use model::{Document, Heading, Line, LineKind, Segment, SegmentKind, SourceLine};
pub use parser::{ParseOptions, SourceParser};
pub use render::{JsonFormat, RenderOptions, RenderStats};

use std::path::{Path, PathBuf};

/// Parse a literate source file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use litdoc::parse_file;
///
/// let doc = parse_file("pkg/cli.py").unwrap();
/// println!("Segments: {}", doc.segment_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = SourceParser::open(path)?;
    parser.parse()
}

/// Parse a literate source file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = SourceParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse source text held in memory.
///
/// `path` selects the language and names the document; it is not read.
///
/// # Example
///
/// ```
/// use litdoc::parse_str;
///
/// let doc = parse_str("demo.py", "# Hello\nprint('hi')\n").unwrap();
/// assert_eq!(doc.segment_count(), 2);
/// ```
pub fn parse_str(path: impl Into<PathBuf>, text: &str) -> Result<Document> {
    SourceParser::from_text(path, text).parse()
}

/// Convert a literate source file to Markdown.
///
/// # Example
///
/// ```no_run
/// use litdoc::{to_markdown, RenderOptions};
///
/// let markdown = to_markdown("pkg/cli.py", &RenderOptions::new().with_title(true)).unwrap();
/// std::fs::write("cli.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, options)
}

/// Dump the document model of a source file as JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}
