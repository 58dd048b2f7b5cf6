//! Rendering of posts, comments and labels
//!
//! Renderers are pure: they turn records into output lines and leave
//! printing to the caller.
//!
//! # Example
//!
//! ```ignore
//! use blog_core::render::RenderManager;
//!
//! let manager = RenderManager::new();
//! let lines = manager.get("text")?.render_posts(&blog.search_posts_by_body("rust"))?;
//! ```

mod json;
mod renderer;
mod text;

pub use json::JsonRenderer;
pub use renderer::{RenderManager, Renderer};
pub use text::TextRenderer;
