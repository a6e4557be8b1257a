//! Section heading extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Heading, Segment};

/// Prose that opens with one or more `#` followed by heading text.
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#+)\s+(\S.*)$").expect("valid heading regex"));

/// Parse heading prose (`## Title`) into a level and trimmed text.
pub fn parse_heading(content: &str) -> Option<(u8, String)> {
    let caps = HEADING_RE.captures(content)?;
    let level = caps[1].len().min(u8::MAX as usize) as u8;
    Some((level, caps[2].trim().to_string()))
}

/// Lift the first line of each comment segment into a heading when it
/// matches the heading convention. Returns whether any heading was found.
///
/// Only the first line is eligible; headings further down a segment stay
/// ordinary prose.
pub fn extract_headings(segments: &mut [Segment]) -> bool {
    let mut found = false;

    for seg in segments.iter_mut().filter(|s| s.is_comment()) {
        let Some(first) = seg.lines.first() else {
            continue;
        };
        if let Some((level, text)) = parse_heading(&first.content) {
            let line = seg.lines.remove(0);
            log::debug!("Heading '{}' (level {}) at line {}", text, level, line.number());
            seg.heading = Some(Heading { level, text, line });
            found = true;
        }
    }

    found
}
