//! Document model types for literate source content.
//!
//! This module defines the intermediate representation that bridges
//! source parsing and rendering: classified lines grouped into alternating
//! comment and code segments. The model is immutable once the parser has
//! produced it, so a serialized [`Document`] doubles as a regression fixture.

mod document;
mod line;
mod segment;

pub use document::Document;
pub use line::{Line, LineKind, SourceLine};
pub use segment::{Heading, Segment, SegmentKind};
