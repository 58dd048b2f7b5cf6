//! Plain text renderer: one line per entity, fields joined by a separator

use super::renderer::Renderer;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::model::{Comment, Label, Post};

/// Plain text renderer
pub struct TextRenderer {
    separator: String,
    include_comments: bool,
    include_labels: bool,
}

impl TextRenderer {
    /// Single-space separator, full cascade
    pub fn new() -> Self {
        Self::from_config(&RenderConfig::default())
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            separator: config.separator.clone(),
            include_comments: config.include_comments,
            include_labels: config.include_labels,
        }
    }

    fn comment_line(&self, comment: &Comment) -> String {
        [comment.author(), comment.body()].join(self.separator.as_str())
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TextRenderer {
    fn render_posts(&self, posts: &[&Post]) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for post in posts {
            lines.push([post.title(), post.author(), post.body()].join(self.separator.as_str()));
            if self.include_comments {
                lines.extend(post.comments().iter().map(|c| self.comment_line(c)));
            }
            if self.include_labels {
                lines.extend(post.labels().iter().map(|l| l.text().to_string()));
            }
        }
        Ok(lines)
    }

    fn render_comments(&self, comments: &[&Comment]) -> Result<Vec<String>> {
        Ok(comments.iter().map(|c| self.comment_line(c)).collect())
    }

    fn render_labels(&self, labels: &[&Label]) -> Result<Vec<String>> {
        Ok(labels.iter().map(|l| l.text().to_string()).collect())
    }

    fn format_name(&self) -> &str {
        "text"
    }
}
