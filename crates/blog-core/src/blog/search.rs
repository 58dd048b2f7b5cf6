//! Read-only searches over a blog
//!
//! Searches are fresh scans on every call and return matches in insertion order.

use super::container::Blog;
use crate::error::{BlogError, Result};
use crate::model::{Comment, Label, Post};
use crate::query::{CommentField, MatchMode, PostField};

impl Blog {
    /// All posts whose `field` contains `substr`
    pub fn search_posts(&self, field: PostField, substr: &str) -> Vec<&Post> {
        self.all_posts()
            .iter()
            .filter(|p| MatchMode::Contains.matches(p.field(field), substr))
            .collect()
    }

    pub fn search_posts_by_title(&self, substr: &str) -> Vec<&Post> {
        self.search_posts(PostField::Title, substr)
    }

    pub fn search_posts_by_author(&self, substr: &str) -> Vec<&Post> {
        self.search_posts(PostField::Author, substr)
    }

    pub fn search_posts_by_body(&self, substr: &str) -> Vec<&Post> {
        self.search_posts(PostField::Body, substr)
    }

    /// Labels of the post titled `post_title` containing `substr`
    pub fn search_labels_in_post(&self, substr: &str, post_title: &str) -> Result<Vec<&Label>> {
        Ok(self.post(post_title)?.search_labels_by_text(substr))
    }

    /// Comments of the post titled `post_title` whose author contains `author`
    pub fn search_comments_by_author_in_post(
        &self,
        author: &str,
        post_title: &str,
    ) -> Result<Vec<&Comment>> {
        Ok(self.post(post_title)?.search_comments(CommentField::Author, author))
    }

    /// Comments of the post titled `post_title` whose body contains `substr`
    pub fn search_comments_by_body_in_post(
        &self,
        substr: &str,
        post_title: &str,
    ) -> Result<Vec<&Comment>> {
        Ok(self.post(post_title)?.search_comments(CommentField::Body, substr))
    }

    /// First comment whose author contains `author`, failing if there is none
    pub fn find_comment_by_author_in_post(&self, author: &str, post_title: &str) -> Result<&Comment> {
        self.post(post_title)?
            .find_comment_by_author(author)
            .ok_or_else(|| BlogError::CommentNotFound {
                author: author.to_string(),
                post: post_title.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_blog() -> Blog {
        let mut blog = Blog::new("Sample");
        blog.add_post("Greeting", "ann", "hello world");
        blog.add_post("Farewell", "bob", "goodbye");
        blog.add_post("Hope", "annika", "world peace");
        blog
    }

    fn titles(posts: Vec<&Post>) -> Vec<&str> {
        posts.into_iter().map(Post::title).collect()
    }

    #[test]
    fn test_search_by_body() {
        let blog = sample_blog();
        assert_eq!(titles(blog.search_posts_by_body("world")), vec!["Greeting", "Hope"]);
        assert!(blog.search_posts_by_body("World").is_empty());
    }

    #[test]
    fn test_search_by_title_and_author() {
        let blog = sample_blog();
        assert_eq!(titles(blog.search_posts_by_title("e")), vec!["Greeting", "Farewell", "Hope"]);
        assert_eq!(titles(blog.search_posts_by_title("Far")), vec!["Farewell"]);
        assert_eq!(titles(blog.search_posts_by_author("ann")), vec!["Greeting", "Hope"]);
    }

    #[test]
    fn test_search_is_repeatable() {
        let blog = sample_blog();
        let first = titles(blog.search_posts_by_body("o"));
        let second = titles(blog.search_posts_by_body("o"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_in_post() {
        let mut blog = sample_blog();
        blog.add_label("intro", "Greeting").unwrap();
        blog.add_label("misc", "Greeting").unwrap();
        blog.add_label("introduction", "Greeting").unwrap();
        blog.add_comment("carl", "nice world", "Greeting").unwrap();
        blog.add_comment("carla", "hi", "Greeting").unwrap();

        let labels: Vec<_> = blog
            .search_labels_in_post("intro", "Greeting")
            .unwrap()
            .into_iter()
            .map(Label::text)
            .collect();
        assert_eq!(labels, vec!["intro", "introduction"]);

        assert_eq!(blog.search_comments_by_author_in_post("carl", "Greeting").unwrap().len(), 2);
        let by_body = blog.search_comments_by_body_in_post("world", "Greeting").unwrap();
        assert_eq!(by_body.len(), 1);
        assert_eq!(by_body[0].author(), "carl");

        assert_eq!(
            blog.find_comment_by_author_in_post("carl", "Greeting").unwrap().body(),
            "nice world"
        );
    }

    #[test]
    fn test_search_in_missing_post_fails() {
        let blog = sample_blog();
        assert!(matches!(
            blog.search_labels_in_post("x", "Nope"),
            Err(BlogError::PostNotFound(_))
        ));
        assert!(blog.search_comments_by_author_in_post("x", "Nope").is_err());
        assert!(blog.search_comments_by_body_in_post("x", "Nope").is_err());
    }

    #[test]
    fn test_find_comment_not_found() {
        let blog = sample_blog();
        let err = blog.find_comment_by_author_in_post("zed", "Hope").unwrap_err();
        assert!(matches!(err, BlogError::CommentNotFound { .. }));
        assert!(err.is_not_found());
    }
}
