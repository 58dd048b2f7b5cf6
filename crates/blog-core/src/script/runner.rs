//! Script execution against a blog

use tracing::{debug, info, warn};

use super::model::{Operation, Script};
use crate::blog::Blog;
use crate::config::ScriptConfig;
use crate::error::{BlogError, Result};
use crate::model::{Comment, Label, Post};
use crate::render::Renderer;

/// Result of one operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Mutation applied
    Done,
    /// Number of records affected; zero is a no-op
    Count(usize),
    Posts(Vec<Post>),
    Comments(Vec<Comment>),
    Labels(Vec<Label>),
    /// Operation failed and the script continued
    Failed(String),
}

impl Outcome {
    /// Render the records carried by this outcome
    ///
    /// Outcomes without records render to no lines.
    pub fn render(&self, renderer: &dyn Renderer) -> Result<Vec<String>> {
        match self {
            Outcome::Posts(posts) => renderer.render_posts(&posts.iter().collect::<Vec<_>>()),
            Outcome::Comments(comments) => {
                renderer.render_comments(&comments.iter().collect::<Vec<_>>())
            }
            Outcome::Labels(labels) => renderer.render_labels(&labels.iter().collect::<Vec<_>>()),
            Outcome::Done | Outcome::Count(_) | Outcome::Failed(_) => Ok(Vec::new()),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Report for one executed step
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// 1-based position in the script
    pub step: usize,
    /// Operation name
    pub op: &'static str,
    pub outcome: Outcome,
}

/// Applies scripts to a blog in order
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    stop_on_error: bool,
}

impl ScriptRunner {
    /// Runner that aborts on the first failure
    pub fn new() -> Self {
        Self {
            stop_on_error: true,
        }
    }

    pub fn from_config(config: &ScriptConfig) -> Self {
        Self {
            stop_on_error: config.stop_on_error,
        }
    }

    /// Set whether a failing step aborts the run
    pub fn with_stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }

    /// Run every operation of the script
    pub fn run(&self, blog: &mut Blog, script: &Script) -> Result<Vec<StepReport>> {
        info!("Running {} operation(s) on '{}'", script.ops.len(), blog.title());

        let mut reports = Vec::with_capacity(script.ops.len());
        for (i, op) in script.ops.iter().enumerate() {
            let step = i + 1;
            let outcome = match apply(blog, op) {
                Ok(outcome) => outcome,
                Err(err) if self.stop_on_error => {
                    return Err(BlogError::Script {
                        step,
                        message: format!("{}: {}", op.name(), err),
                    });
                }
                Err(err) => {
                    warn!("Step {} ({}) failed: {}", step, op.name(), err);
                    Outcome::Failed(err.to_string())
                }
            };
            debug!("Step {} ({}) -> {:?}", step, op.name(), outcome);
            reports.push(StepReport {
                step,
                op: op.name(),
                outcome,
            });
        }

        Ok(reports)
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a single operation
pub fn apply(blog: &mut Blog, op: &Operation) -> Result<Outcome> {
    let outcome = match op {
        Operation::AddPost {
            title,
            author,
            body,
        } => {
            blog.add_post(title.as_str(), author.as_str(), body.as_str());
            Outcome::Done
        }
        Operation::RemovePostByTitle { title } => {
            Outcome::Count(usize::from(blog.remove_post_by_title(title).is_some()))
        }
        Operation::RemovePostsByAuthor { author } => {
            Outcome::Count(blog.remove_posts_by_author(author).len())
        }
        Operation::UpdatePostBody { post, body } => {
            blog.update_post_body(body.as_str(), post)?;
            Outcome::Done
        }
        Operation::FindPost { title } => Outcome::Posts(vec![blog.post(title)?.clone()]),
        Operation::SearchPosts { field, query } => {
            Outcome::Posts(blog.search_posts(*field, query).into_iter().cloned().collect())
        }
        Operation::ListPosts => Outcome::Posts(blog.all_posts().to_vec()),
        Operation::AddLabel { post, text } => {
            blog.add_label(text.as_str(), post)?;
            Outcome::Done
        }
        Operation::SearchLabels { post, query } => Outcome::Labels(
            blog.search_labels_in_post(query, post)?
                .into_iter()
                .cloned()
                .collect(),
        ),
        Operation::AddComment { post, author, body } => {
            blog.add_comment(author.as_str(), body.as_str(), post)?;
            Outcome::Done
        }
        Operation::UpdateComment { post, author, body } => {
            Outcome::Count(blog.update_comment(author, body, post)?)
        }
        Operation::RemoveComment { post, author } => {
            Outcome::Count(usize::from(blog.remove_comment(author, post)?.is_some()))
        }
        Operation::FindComment { post, author } => Outcome::Comments(vec![blog
            .find_comment_by_author_in_post(author, post)?
            .clone()]),
        Operation::SearchComments { post, field, query } => Outcome::Comments(
            blog.post(post)?
                .search_comments(*field, query)
                .into_iter()
                .cloned()
                .collect(),
        ),
    };
    Ok(outcome)
}
