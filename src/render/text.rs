//! Source reconstruction from the document model.

use crate::model::{Document, LineKind};

/// Rebuild source text from a document.
///
/// Comment lines are written back as indentation, marker, one space and
/// prose; code and blank lines are written verbatim. The result matches the
/// original file except for the space after each comment marker and
/// dropped leading blank lines.
pub fn to_source(doc: &Document) -> String {
    let language = doc.language;
    let mut output = String::new();

    for line in doc.segments.iter().flat_map(|s| s.all_lines()) {
        match line.kind {
            LineKind::Comment => {
                let marker = language
                    .marker_of(line.source.text.trim_start())
                    .unwrap_or_else(|| language.comment_marker());
                output.push_str(line.source.indent());
                output.push_str(marker);
                if !line.content.is_empty() {
                    output.push(' ');
                    output.push_str(&line.content);
                }
            }
            LineKind::Code | LineKind::Blank => output.push_str(&line.content),
        }
        output.push('\n');
    }

    output
}
