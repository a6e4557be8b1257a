//! Literate source parsing module.

mod classifier;
mod heading;
mod options;
mod segmenter;
mod source_parser;

pub use classifier::LineClassifier;
pub use heading::{extract_headings, parse_heading};
pub use options::ParseOptions;
pub use segmenter::segment;
pub use source_parser::SourceParser;
