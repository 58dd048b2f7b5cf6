//! Error types for blogstore

use thiserror::Error;

/// Main error type for blogstore
#[derive(Debug, Error)]
pub enum BlogError {
    /// No post has the requested title
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// No comment by the requested author in the post
    #[error("Comment by '{author}' not found in post '{post}'")]
    CommentNotFound { author: String, post: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operation script error
    #[error("Script error at step {step}: {message}")]
    Script { step: usize, message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<BlogError>,
    },
}

impl BlogError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        BlogError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error is a failed lookup, looking through any context
    pub fn is_not_found(&self) -> bool {
        match self {
            BlogError::PostNotFound(_) | BlogError::CommentNotFound { .. } => true,
            BlogError::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for BlogError {
    fn from(err: toml::de::Error) -> Self {
        BlogError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for BlogError {
    fn from(err: toml::ser::Error) -> Self {
        BlogError::Toml(err.to_string())
    }
}

/// Result type alias for blogstore
pub type Result<T> = std::result::Result<T, BlogError>;
