//! JSON Lines renderer

use super::renderer::Renderer;
use crate::error::Result;
use crate::model::{Comment, Label, Post};
use serde::Serialize;

/// Renders each record as one compact JSON object per line
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }

    fn lines<T: Serialize>(items: &[&T]) -> Result<Vec<String>> {
        items
            .iter()
            .map(|item| serde_json::to_string(item).map_err(Into::into))
            .collect()
    }
}

impl Renderer for JsonRenderer {
    fn render_posts(&self, posts: &[&Post]) -> Result<Vec<String>> {
        Self::lines(posts)
    }

    fn render_comments(&self, comments: &[&Comment]) -> Result<Vec<String>> {
        Self::lines(comments)
    }

    fn render_labels(&self, labels: &[&Label]) -> Result<Vec<String>> {
        Self::lines(labels)
    }

    fn format_name(&self) -> &str {
        "json"
    }
}
