//! Markdown rendering for literate documents.

use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::model::{Document, Heading, Segment, SegmentKind};

use super::{RenderOptions, RenderResult, RenderStats};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// A rendered chunk of output.
///
/// Chunks are separated by one blank line unless `attached` is set, in
/// which case the chunk starts on the line right after the previous one.
struct Chunk {
    text: String,
    attached: bool,
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        Ok(self.render_internal(doc))
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        let content = self.render_internal(doc);
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let mut chunks = Vec::new();

        if self.options.title && doc.leading_title().is_none() {
            chunks.push(Chunk {
                text: format!("# {}", doc.file_name()),
                attached: false,
            });
        }

        if self.options.toc && doc.has_headings {
            chunks.push(Chunk {
                text: render_toc(doc.headings()),
                attached: false,
            });
        }

        // Whether the last segment was a comment that produced output.
        let mut after_prose = false;
        for segment in &doc.segments {
            match segment.kind {
                SegmentKind::Comment => {
                    let before = chunks.len();
                    self.render_comment(&mut chunks, segment);
                    after_prose = chunks.len() > before;
                }
                SegmentKind::Code => {
                    let attached = self.options.inline && after_prose;
                    self.render_code(&mut chunks, segment, doc, attached);
                    after_prose = false;
                }
            }
        }

        if chunks.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                output.push_str(if chunk.attached { "\n" } else { "\n\n" });
            }
            output.push_str(&chunk.text);
        }
        output.push('\n');
        output
    }

    fn render_comment(&mut self, chunks: &mut Vec<Chunk>, segment: &Segment) {
        self.stats.add_comment_segment();

        if let Some(ref heading) = segment.heading {
            self.stats.add_heading();
            let level = rendered_level(heading);
            chunks.push(Chunk {
                text: format!("{} {}", "#".repeat(level), heading.text),
                attached: false,
            });
        }

        let prose = collapse_prose(segment);
        if prose.is_empty() {
            return;
        }
        self.stats.add_prose_lines(prose.iter().filter(|l| !l.is_empty()).count());
        chunks.push(Chunk {
            text: prose.join("\n"),
            attached: false,
        });
    }

    fn render_code(
        &mut self,
        chunks: &mut Vec<Chunk>,
        segment: &Segment,
        doc: &Document,
        attached: bool,
    ) {
        let lines = segment.trimmed_lines();
        let Some(first) = lines.first() else {
            return;
        };
        self.stats.add_code_segment();
        self.stats.add_code_lines(lines.len());

        let fence = fence_for(lines.iter().map(|l| l.content.as_str()));
        let mut text = fence.clone();
        if self.options.highlights {
            text.push_str(doc.language.hint());
        }
        if self.options.linenums {
            text.push_str(&format!(" linenums=\"{}\"", first.number()));
        }
        for line in lines {
            text.push('\n');
            text.push_str(&line.content);
        }
        text.push('\n');
        text.push_str(&fence);

        chunks.push(Chunk { text, attached });
    }
}

/// Prose lines of a comment segment with blank runs collapsed and the
/// edges trimmed. Blank lines are returned as empty strings.
fn collapse_prose(segment: &Segment) -> Vec<&str> {
    let mut prose: Vec<&str> = Vec::new();
    for line in &segment.lines {
        let text = line.content.as_str();
        if text.trim().is_empty() {
            if prose.last().is_some_and(|l| !l.is_empty()) {
                prose.push("");
            }
        } else {
            prose.push(text);
        }
    }
    while prose.last().is_some_and(|l| l.is_empty()) {
        prose.pop();
    }
    prose
}

/// Pick a backtick fence longer than any fence-like run inside the block.
fn fence_for<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    let longest = lines
        .map(|l| l.trim_start().chars().take_while(|c| *c == '`').count())
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

fn render_toc<'a>(headings: impl Iterator<Item = &'a Heading>) -> String {
    let headings: Vec<_> = headings.collect();
    let min_level = headings.iter().map(|h| rendered_level(h)).min().unwrap_or(1);
    let mut anchors = Anchors::default();

    headings
        .iter()
        .map(|h| {
            let indent = "  ".repeat(rendered_level(h) - min_level);
            format!("{}- [{}](#{})", indent, h.text, anchors.next(&h.text))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markdown heading level; deeper markers are clamped to `######`.
fn rendered_level(heading: &Heading) -> usize {
    heading.level.clamp(1, 6) as usize
}

/// Unique anchors for one document: repeated slugs get `-1`, `-2`, ...
#[derive(Default)]
struct Anchors {
    used: HashSet<String>,
    counts: HashMap<String, usize>,
}

impl Anchors {
    fn next(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.counts.entry(base.clone()).or_insert(0);
        let mut slug = base.clone();
        while self.used.contains(&slug) {
            *count += 1;
            slug = format!("{}-{}", base, count);
        }
        self.used.insert(slug.clone());
        slug
    }
}

/// GitHub-style heading anchor.
pub(crate) fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}
