//! Post data models
//!
//! A post owns its labels and comments; neither exists outside a post.

mod comment;
mod label;
mod post;

pub use comment::Comment;
pub use label::Label;
pub use post::Post;
