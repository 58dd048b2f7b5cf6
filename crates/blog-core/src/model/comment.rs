use serde::{Deserialize, Serialize};

use crate::query::CommentField;

/// An (author, body) pair attached to a post
///
/// Authors are not unique within a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    author: String,
    body: String,
}

impl Comment {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Get the value of a searchable field
    pub fn field(&self, field: CommentField) -> &str {
        match field {
            CommentField::Author => &self.author,
            CommentField::Body => &self.body,
        }
    }
}
