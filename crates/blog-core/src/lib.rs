//! blog-core - Core library for blogstore
//!
//! This crate provides the in-memory content store for a single blog:
//! posts with their labels and comments, resolved and searched by
//! free-text keys, plus rendering and operation scripts for callers.

pub mod error;
pub mod types;
pub mod config;
pub mod query;
pub mod model;
pub mod blog;
pub mod render;
pub mod script;

pub use blog::Blog;
pub use config::Config;
pub use error::{BlogError, Result};
pub use model::{Comment, Label, Post};
pub use types::*;
