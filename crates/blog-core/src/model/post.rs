use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::label::Label;
use crate::query::{CommentField, MatchMode, PostField};
use crate::types::PostId;

/// A blog post owning ordered labels and comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Surrogate key, not used by text lookups
    #[serde(default)]
    id: PostId,
    title: String,
    author: String,
    body: String,
    #[serde(default)]
    labels: Vec<Label>,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl Post {
    /// Create a post with no labels or comments
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: PostId::new(),
            title: title.into(),
            author: author.into(),
            body: body.into(),
            labels: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
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
    pub fn field(&self, field: PostField) -> &str {
        match field {
            PostField::Title => &self.title,
            PostField::Author => &self.author,
            PostField::Body => &self.body,
        }
    }

    /// Labels in insertion order
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Comments in insertion order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Append a label
    pub fn add_label(&mut self, text: impl Into<String>) {
        self.labels.push(Label::new(text));
    }

    /// Append a comment
    pub fn add_comment(&mut self, author: impl Into<String>, body: impl Into<String>) {
        self.comments.push(Comment::new(author, body));
    }

    /// Remove the first comment whose author equals `author`
    ///
    /// Returns `None` when nothing matched. Only one comment is removed even
    /// if the author commented several times.
    pub fn remove_comment_by_author(&mut self, author: &str) -> Option<Comment> {
        let pos = self
            .comments
            .iter()
            .position(|c| MatchMode::Exact.matches(c.author(), author))?;
        Some(self.comments.remove(pos))
    }

    /// Replace the body of every comment whose author equals `author`
    ///
    /// Unlike removal this is all-match: every comment by the author is
    /// edited. Returns the number of edited comments; zero is a no-op.
    pub fn edit_comment_by_author(&mut self, author: &str, body: &str) -> usize {
        let mut edited = 0;
        for comment in self
            .comments
            .iter_mut()
            .filter(|c| MatchMode::Exact.matches(c.author(), author))
        {
            comment.set_body(body);
            edited += 1;
        }
        edited
    }

    /// First comment whose author contains `substr`
    pub fn find_comment_by_author(&self, substr: &str) -> Option<&Comment> {
        self.comments
            .iter()
            .find(|c| MatchMode::Contains.matches(c.author(), substr))
    }

    /// All comments whose `field` contains `substr`, in order
    pub fn search_comments(&self, field: CommentField, substr: &str) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| MatchMode::Contains.matches(c.field(field), substr))
            .collect()
    }

    pub fn search_comments_by_author(&self, substr: &str) -> Vec<&Comment> {
        self.search_comments(CommentField::Author, substr)
    }

    pub fn search_comments_by_body(&self, substr: &str) -> Vec<&Comment> {
        self.search_comments(CommentField::Body, substr)
    }

    /// All labels whose text contains `substr`, in order
    pub fn search_labels_by_text(&self, substr: &str) -> Vec<&Label> {
        self.labels
            .iter()
            .filter(|l| MatchMode::Contains.matches(l.text(), substr))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bodies(comments: &[Comment]) -> Vec<(&str, &str)> {
        comments.iter().map(|c| (c.author(), c.body())).collect()
    }

    fn post_with_three_by_a() -> Post {
        let mut post = Post::new("T", "X", "body");
        post.add_comment("A", "x");
        post.add_comment("B", "other");
        post.add_comment("A", "y");
        post.add_comment("A", "z");
        post
    }

    #[test]
    fn test_fields_allow_empty() {
        let mut post = Post::new("", "", "");
        assert_eq!(post.title(), "");
        post.set_title("New");
        post.set_author("me");
        post.set_body("text");
        assert_eq!(post.field(PostField::Title), "New");
        assert_eq!(post.field(PostField::Author), "me");
        assert_eq!(post.field(PostField::Body), "text");
    }

    #[test]
    fn test_add_preserves_order() {
        let mut post = Post::new("T", "X", "b");
        post.add_label("one");
        post.add_label("two");
        post.add_comment("a", "1");
        post.add_comment("b", "2");

        let labels: Vec<_> = post.labels().iter().map(Label::text).collect();
        assert_eq!(labels, vec!["one", "two"]);
        assert_eq!(bodies(post.comments()), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_edit_is_all_match() {
        let mut post = post_with_three_by_a();
        let edited = post.edit_comment_by_author("A", "Z");

        assert_eq!(edited, 3);
        assert_eq!(
            bodies(post.comments()),
            vec![("A", "Z"), ("B", "other"), ("A", "Z"), ("A", "Z")]
        );
    }

    #[test]
    fn test_remove_is_first_match() {
        let mut post = post_with_three_by_a();
        let removed = post.remove_comment_by_author("A").unwrap();

        assert_eq!(removed.body(), "x");
        assert_eq!(
            bodies(post.comments()),
            vec![("B", "other"), ("A", "y"), ("A", "z")]
        );
        assert_eq!(post.search_comments_by_author("A").len(), 2);
    }

    #[test]
    fn test_remove_and_edit_exact_only() {
        let mut post = post_with_three_by_a();
        post.add_comment("Alice", "hi");

        assert_eq!(post.edit_comment_by_author("Al", "changed"), 0);
        assert!(post.remove_comment_by_author("a").is_none());
        assert_eq!(post.comments().len(), 5);
    }

    #[test]
    fn test_find_comment_by_author_substring_first() {
        let mut post = Post::new("T", "X", "b");
        post.add_comment("bob", "first");
        post.add_comment("alice", "second");
        post.add_comment("alicia", "third");

        assert_eq!(post.find_comment_by_author("ali").unwrap().body(), "second");
        assert!(post.find_comment_by_author("carol").is_none());
    }

    #[test]
    fn test_search_comments() {
        let mut post = Post::new("T", "X", "b");
        post.add_comment("ann", "great read");
        post.add_comment("bob", "read it twice");
        post.add_comment("annie", "meh");

        let by_author: Vec<_> = post
            .search_comments_by_author("ann")
            .into_iter()
            .map(Comment::body)
            .collect();
        assert_eq!(by_author, vec!["great read", "meh"]);

        let by_body: Vec<_> = post
            .search_comments_by_body("read")
            .into_iter()
            .map(Comment::author)
            .collect();
        assert_eq!(by_body, vec!["ann", "bob"]);
    }

    #[test]
    fn test_search_labels() {
        let mut post = Post::new("T", "X", "b");
        post.add_label("rust");
        post.add_label("python");
        post.add_label("rustacean");

        let found: Vec<_> = post
            .search_labels_by_text("rust")
            .into_iter()
            .map(Label::text)
            .collect();
        assert_eq!(found, vec!["rust", "rustacean"]);
        assert!(post.search_labels_by_text("Rust").is_empty());
    }

    #[test]
    fn test_post_serialization() {
        let mut post = Post::new("T", "X", "b");
        post.add_label("l");
        post.add_comment("a", "c");

        let json = serde_json::to_string(&post).unwrap();
        let post2: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(post, post2);
    }
}
