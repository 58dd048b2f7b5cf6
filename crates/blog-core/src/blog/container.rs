//! Blog container: post storage, title resolution and mutations

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BlogError, Result};
use crate::model::{Comment, Post};
use crate::query::MatchMode;
use crate::types::PostId;

/// A single publication owning an ordered sequence of posts
///
/// Posts are addressed by title. Titles are not required to be unique;
/// every title-keyed operation acts on the first post with that title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    title: String,
    #[serde(default)]
    posts: Vec<Post>,
}

impl Blog {
    /// Create an empty blog
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            posts: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// All posts in insertion order
    pub fn all_posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look a post up by its surrogate key
    pub fn post_by_id(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id() == id)
    }

    /// Append a new post; duplicate titles are accepted
    pub fn add_post(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> PostId {
        let post = Post::new(title, author, body);
        let id = post.id().clone();
        debug!("Added post '{}' ({})", post.title(), id);
        self.posts.push(post);
        id
    }

    /// Index of the first post whose title equals `title`
    pub fn find_post_index(&self, title: &str) -> Result<usize> {
        self.posts
            .iter()
            .position(|p| MatchMode::Exact.matches(p.title(), title))
            .ok_or_else(|| BlogError::PostNotFound(title.to_string()))
    }

    /// First post whose title equals `title`
    pub fn post(&self, title: &str) -> Result<&Post> {
        let index = self.find_post_index(title)?;
        Ok(&self.posts[index])
    }

    fn post_mut(&mut self, title: &str) -> Result<&mut Post> {
        let index = self.find_post_index(title)?;
        Ok(&mut self.posts[index])
    }

    /// Remove the first post titled `title`; `None` if there is none
    pub fn remove_post_by_title(&mut self, title: &str) -> Option<Post> {
        let index = self.find_post_index(title).ok()?;
        let post = self.posts.remove(index);
        debug!("Removed post '{}' at index {}", title, index);
        Some(post)
    }

    /// Remove every post whose author equals `author`
    ///
    /// Returns the removed posts in their original order. The remaining
    /// posts keep their relative order.
    pub fn remove_posts_by_author(&mut self, author: &str) -> Vec<Post> {
        let (removed, kept): (Vec<Post>, Vec<Post>) = std::mem::take(&mut self.posts)
            .into_iter()
            .partition(|p| MatchMode::Exact.matches(p.author(), author));
        self.posts = kept;
        debug!("Removed {} post(s) by '{}'", removed.len(), author);
        removed
    }

    /// Append a label to the post titled `post_title`
    pub fn add_label(&mut self, label: impl Into<String>, post_title: &str) -> Result<()> {
        self.post_mut(post_title)?.add_label(label);
        debug!("Added label to '{}'", post_title);
        Ok(())
    }

    /// Append a comment to the post titled `post_title`
    pub fn add_comment(
        &mut self,
        author: impl Into<String>,
        body: impl Into<String>,
        post_title: &str,
    ) -> Result<()> {
        self.post_mut(post_title)?.add_comment(author, body);
        debug!("Added comment to '{}'", post_title);
        Ok(())
    }

    /// Set the body of every comment by `author` in the post
    ///
    /// Returns the number of edited comments.
    pub fn update_comment(&mut self, author: &str, body: &str, post_title: &str) -> Result<usize> {
        let edited = self.post_mut(post_title)?.edit_comment_by_author(author, body);
        debug!(
            "Edited {} comment(s) by '{}' in '{}'",
            edited, author, post_title
        );
        Ok(edited)
    }

    /// Replace the body of the post titled `post_title`
    pub fn update_post_body(&mut self, body: impl Into<String>, post_title: &str) -> Result<()> {
        self.post_mut(post_title)?.set_body(body);
        debug!("Updated body of '{}'", post_title);
        Ok(())
    }

    /// Remove the first comment by `author` from the post
    pub fn remove_comment(&mut self, author: &str, post_title: &str) -> Result<Option<Comment>> {
        let removed = self.post_mut(post_title)?.remove_comment_by_author(author);
        if removed.is_some() {
            debug!("Removed comment by '{}' from '{}'", author, post_title);
        }
        Ok(removed)
    }

    /// Titles held by more than one post, each reported once
    pub fn duplicate_titles(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = Vec::new();
        for (i, post) in self.posts.iter().enumerate() {
            let title = post.title();
            if duplicates.contains(&title) {
                continue;
            }
            if self.posts[i + 1..].iter().any(|p| p.title() == title) {
                duplicates.push(title);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(blog: &Blog) -> Vec<&str> {
        blog.all_posts().iter().map(Post::title).collect()
    }

    #[test]
    fn test_add_then_resolve() {
        let mut blog = Blog::new("b");
        blog.add_post("First", "X", "1");
        let id = blog.add_post("Second", "Y", "2");

        assert_eq!(blog.find_post_index("Second").unwrap(), 1);
        assert_eq!(blog.post("Second").unwrap().id(), &id);
        assert_eq!(blog.post_by_id(&id).unwrap().title(), "Second");
    }

    #[test]
    fn test_resolve_is_exact_and_fails_on_miss() {
        let mut blog = Blog::new("b");
        blog.add_post("Hello world", "X", "1");

        assert!(matches!(
            blog.find_post_index("Hello"),
            Err(BlogError::PostNotFound(t)) if t == "Hello"
        ));
        assert!(blog.find_post_index("hello world").is_err());
        assert!(Blog::new("empty").find_post_index("").is_err());
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first() {
        let mut blog = Blog::new("b");
        blog.add_post("Same", "X", "first");
        blog.add_post("Same", "Y", "second");

        blog.update_post_body("changed", "Same").unwrap();
        assert_eq!(blog.all_posts()[0].body(), "changed");
        assert_eq!(blog.all_posts()[1].body(), "second");
        assert_eq!(blog.duplicate_titles(), vec!["Same"]);
    }

    #[test]
    fn test_remove_by_title_first_only() {
        let mut blog = Blog::new("b");
        blog.add_post("A", "X", "1");
        blog.add_post("B", "X", "2");
        blog.add_post("C", "X", "3");

        let removed = blog.remove_post_by_title("B").unwrap();
        assert_eq!(removed.title(), "B");
        assert_eq!(titles(&blog), vec!["A", "C"]);
        assert!(blog.find_post_index("B").is_err());
        assert!(blog.remove_post_by_title("B").is_none());
    }

    #[test]
    fn test_remove_by_title_duplicate() {
        let mut blog = Blog::new("b");
        blog.add_post("Same", "X", "first");
        blog.add_post("Same", "Y", "second");

        blog.remove_post_by_title("Same");
        assert_eq!(blog.len(), 1);
        assert_eq!(blog.post("Same").unwrap().body(), "second");
    }

    #[test]
    fn test_remove_by_author_all() {
        let mut blog = Blog::new("b");
        blog.add_post("T1", "X", "");
        blog.add_post("T2", "X", "");
        blog.add_post("T3", "Y", "");

        let removed = blog.remove_posts_by_author("X");
        assert_eq!(removed.len(), 2);
        assert_eq!(titles(&blog), vec!["T3"]);
        assert_eq!(blog.all_posts()[0].author(), "Y");
    }

    #[test]
    fn test_remove_by_author_adjacent_and_interleaved() {
        let mut blog = Blog::new("b");
        for (title, author) in [("1", "X"), ("2", "X"), ("3", "Y"), ("4", "X"), ("5", "Z"), ("6", "X")] {
            blog.add_post(title, author, "");
        }

        let removed: Vec<_> = blog
            .remove_posts_by_author("X")
            .iter()
            .map(|p| p.title().to_string())
            .collect();
        assert_eq!(removed, vec!["1", "2", "4", "6"]);
        assert_eq!(titles(&blog), vec!["3", "5"]);
    }

    #[test]
    fn test_remove_by_author_compares_author_not_title() {
        let mut blog = Blog::new("b");
        blog.add_post("X", "Y", "");

        assert!(blog.remove_posts_by_author("X").is_empty());
        assert_eq!(blog.len(), 1);
    }

    #[test]
    fn test_add_comment_missing_post_leaves_blog_unchanged() {
        let mut blog = Blog::new("b");
        let before = blog.clone();

        let err = blog.add_comment("A", "b", "NoSuchTitle").unwrap_err();
        assert!(matches!(err, BlogError::PostNotFound(_)));
        assert_eq!(blog, before);

        blog.add_post("Real", "X", "");
        let before = blog.clone();
        assert!(blog.add_label("l", "NoSuchTitle").is_err());
        assert!(blog.update_comment("A", "b", "NoSuchTitle").is_err());
        assert!(blog.update_post_body("b", "NoSuchTitle").is_err());
        assert!(blog.remove_comment("A", "NoSuchTitle").is_err());
        assert_eq!(blog, before);
    }

    #[test]
    fn test_delegated_mutations() {
        let mut blog = Blog::new("b");
        blog.add_post("P", "X", "body");
        blog.add_label("rust", "P").unwrap();
        blog.add_comment("A", "x", "P").unwrap();
        blog.add_comment("A", "y", "P").unwrap();

        assert_eq!(blog.update_comment("A", "Z", "P").unwrap(), 2);
        assert_eq!(blog.update_comment("nobody", "Z", "P").unwrap(), 0);
        assert_eq!(blog.remove_comment("A", "P").unwrap().unwrap().body(), "Z");
        assert!(blog.remove_comment("nobody", "P").unwrap().is_none());

        let post = blog.post("P").unwrap();
        assert_eq!(post.labels().len(), 1);
        assert_eq!(post.comments().len(), 1);
    }

    #[test]
    fn test_duplicate_titles_reported_once() {
        let mut blog = Blog::new("b");
        for title in ["a", "b", "a", "a", "c", "b"] {
            blog.add_post(title, "X", "");
        }
        assert_eq!(blog.duplicate_titles(), vec!["a", "b"]);
    }
}
