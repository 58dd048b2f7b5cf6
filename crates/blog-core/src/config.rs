//! Configuration management for blogstore

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BlogError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Blog settings
    pub blog: BlogConfig,
    /// Render settings
    pub render: RenderConfig,
    /// Script settings
    pub script: ScriptConfig,
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.render.format.trim().is_empty() {
            return Err(BlogError::Config("render.format cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Blog-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Title used when a script does not name its blog
    pub default_title: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            default_title: "Untitled Blog".to_string(),
        }
    }
}

/// Render-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Default output format (text/json)
    pub format: String,
    /// Field separator for text output
    pub separator: String,
    /// Render a post's comments after the post line
    pub include_comments: bool,
    /// Render a post's labels after its comments
    pub include_labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            separator: " ".to_string(),
            include_comments: true,
            include_labels: true,
        }
    }
}

/// Script-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Abort at the first failing operation
    pub stop_on_error: bool,
    /// Warn when a script leaves several posts with one title
    pub warn_on_duplicate_titles: bool,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            stop_on_error: true,
            warn_on_duplicate_titles: true,
        }
    }
}
