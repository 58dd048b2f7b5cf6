//! Operation script data models

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::query::{CommentField, PostField};

/// An ordered list of operations applied to one blog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Blog title; the configured default is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Operations in execution order
    #[serde(default)]
    pub ops: Vec<Operation>,
}

impl Script {
    /// Parse a TOML script
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON script
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a script, treating content that starts with `{` as JSON
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim_start().starts_with('{') {
            Self::from_json_str(content)
        } else {
            Self::from_toml_str(content)
        }
    }

    /// Load a script file; `.json` files are JSON, anything else TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        };
        parsed.map_err(|e| e.with_context(format!("Failed to parse {}", path.display())))
    }
}

/// One call into the blog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    AddPost {
        title: String,
        author: String,
        #[serde(default)]
        body: String,
    },
    RemovePostByTitle {
        title: String,
    },
    RemovePostsByAuthor {
        author: String,
    },
    UpdatePostBody {
        post: String,
        body: String,
    },
    FindPost {
        title: String,
    },
    SearchPosts {
        field: PostField,
        query: String,
    },
    ListPosts,
    AddLabel {
        post: String,
        text: String,
    },
    SearchLabels {
        post: String,
        query: String,
    },
    AddComment {
        post: String,
        author: String,
        #[serde(default)]
        body: String,
    },
    UpdateComment {
        post: String,
        author: String,
        body: String,
    },
    RemoveComment {
        post: String,
        author: String,
    },
    FindComment {
        post: String,
        author: String,
    },
    SearchComments {
        post: String,
        field: CommentField,
        query: String,
    },
}

impl Operation {
    /// Tag name as written in scripts
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddPost { .. } => "add_post",
            Operation::RemovePostByTitle { .. } => "remove_post_by_title",
            Operation::RemovePostsByAuthor { .. } => "remove_posts_by_author",
            Operation::UpdatePostBody { .. } => "update_post_body",
            Operation::FindPost { .. } => "find_post",
            Operation::SearchPosts { .. } => "search_posts",
            Operation::ListPosts => "list_posts",
            Operation::AddLabel { .. } => "add_label",
            Operation::SearchLabels { .. } => "search_labels",
            Operation::AddComment { .. } => "add_comment",
            Operation::UpdateComment { .. } => "update_comment",
            Operation::RemoveComment { .. } => "remove_comment",
            Operation::FindComment { .. } => "find_comment",
            Operation::SearchComments { .. } => "search_comments",
        }
    }

    /// Whether the operation can change the blog
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Operation::AddPost { .. }
                | Operation::RemovePostByTitle { .. }
                | Operation::RemovePostsByAuthor { .. }
                | Operation::UpdatePostBody { .. }
                | Operation::AddLabel { .. }
                | Operation::AddComment { .. }
                | Operation::UpdateComment { .. }
                | Operation::RemoveComment { .. }
        )
    }
}
