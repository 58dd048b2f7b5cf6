//! Renderer trait and manager

use crate::config::RenderConfig;
use crate::error::{BlogError, Result};
use crate::model::{Comment, Label, Post};
use std::collections::HashMap;

/// Trait for turning records into output lines
pub trait Renderer: Send + Sync {
    /// Render posts, cascading into their children where the format does
    fn render_posts(&self, posts: &[&Post]) -> Result<Vec<String>>;

    /// Render comments, one line each
    fn render_comments(&self, comments: &[&Comment]) -> Result<Vec<String>>;

    /// Render labels, one line each
    fn render_labels(&self, labels: &[&Label]) -> Result<Vec<String>>;

    /// Get the format name
    fn format_name(&self) -> &str;
}

/// Manager for handling multiple output formats
pub struct RenderManager {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RenderManager {
    /// Create a manager with default renderers
    pub fn new() -> Self {
        Self::from_config(&RenderConfig::default())
    }

    /// Create a manager with renderers set up from configuration
    pub fn from_config(config: &RenderConfig) -> Self {
        let mut manager = Self {
            renderers: HashMap::new(),
        };

        manager.register(Box::new(super::text::TextRenderer::from_config(config)));
        manager.register(Box::new(super::json::JsonRenderer::new()));

        manager
    }

    /// Register a new renderer
    pub fn register(&mut self, renderer: Box<dyn Renderer>) {
        self.renderers
            .insert(renderer.format_name().to_string(), renderer);
    }

    /// Get a renderer by format name
    pub fn get(&self, format: &str) -> Result<&dyn Renderer> {
        self.renderers
            .get(format)
            .map(|r| r.as_ref())
            .ok_or_else(|| BlogError::Config(format!("Unknown render format: {}", format)))
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.renderers.contains_key(format)
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.renderers.keys().cloned().collect();
        formats.sort();
        formats
    }
}

impl Default for RenderManager {
    fn default() -> Self {
        Self::new()
    }
}
