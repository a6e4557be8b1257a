//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered Markdown
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of comment segments rendered
    pub comment_segments: u32,

    /// Number of code blocks emitted
    pub code_segments: u32,

    /// Number of headings emitted (synthesized titles excluded)
    pub headings: u32,

    /// Non-blank prose lines emitted
    pub prose_lines: u32,

    /// Code lines emitted, interior blanks included
    pub code_lines: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment comment segment count.
    pub fn add_comment_segment(&mut self) {
        self.comment_segments += 1;
    }

    /// Increment code segment count.
    pub fn add_code_segment(&mut self) {
        self.code_segments += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.headings += 1;
    }

    /// Add emitted prose lines.
    pub fn add_prose_lines(&mut self, count: usize) {
        self.prose_lines += count as u32;
    }

    /// Add emitted code lines.
    pub fn add_code_lines(&mut self, count: usize) {
        self.code_lines += count as u32;
    }

    /// Merge statistics from another instance.
    pub fn merge(&mut self, other: &RenderStats) {
        self.comment_segments += other.comment_segments;
        self.code_segments += other.code_segments;
        self.headings += other.headings;
        self.prose_lines += other.prose_lines;
        self.code_lines += other.code_lines;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stats_merge() {
        let mut stats1 = RenderStats::new();
        stats1.add_heading();
        stats1.add_code_lines(4);

        let stats2 = RenderStats {
            headings: 2,
            code_segments: 3,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.headings, 3);
        assert_eq!(stats1.code_segments, 3);
        assert_eq!(stats1.code_lines, 4);
    }

    #[test]
    fn test_render_result_len() {
        let result = RenderResult::new("# Hello\n".to_string(), RenderStats::default());
        assert_eq!(result.content_len(), 8);
    }
}
