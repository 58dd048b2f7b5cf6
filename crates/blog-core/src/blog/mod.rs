//! Blog container module
//!
//! Resolves posts by title and forwards comment and label operations to them.

mod container;
mod search;

pub use container::Blog;
