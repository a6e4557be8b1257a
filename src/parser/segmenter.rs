//! Grouping of classified lines into alternating segments.

use crate::model::{Line, Segment, SegmentKind};

/// Group classified lines into segments.
///
/// A comment or code line extends the open segment of the same kind, or
/// closes it and opens a new one. Blank lines extend whichever segment is
/// open; blank lines before the first non-blank line are dropped. Adjacent
/// segments therefore never share a kind.
pub fn segment(lines: Vec<Line>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut open: Option<Segment> = None;

    for line in lines {
        let kind = match SegmentKind::of(line.kind) {
            Some(kind) => kind,
            None => {
                if let Some(ref mut seg) = open {
                    seg.push(line);
                }
                continue;
            }
        };

        match open {
            Some(ref mut seg) if seg.kind == kind => seg.push(line),
            _ => {
                if let Some(seg) = open.take() {
                    segments.push(seg);
                }
                open = Some(Segment::new(kind, line));
            }
        }
    }

    if let Some(seg) = open {
        segments.push(seg);
    }

    segments
}
