// Feed state - posts, the composer, and per-post interaction counters

use crate::model::{MediaKind, Post, PostMedia};
use chrono::Local;
use std::collections::{HashMap, HashSet};

pub struct FeedState {
    pub posts: Vec<Post>,
    pub composer: String,
    pub attachment: Option<PostMedia>,
    pub comment_drafts: HashMap<u64, String>,
    pub open_comments: HashSet<u64>,
    pub loading: bool,
    next_id: u64,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            composer: String::new(),
            attachment: None,
            comment_drafts: HashMap::new(),
            open_comments: HashSet::new(),
            loading: false,
            next_id: 1,
        }
    }

    /// Replace the feed with freshly fetched posts.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.posts = posts;
        self.loading = false;
    }

    /// Publish the composer as a new post. Empty composer with no
    /// attachment is a no-op.
    pub fn submit_post(&mut self, author: &str) -> bool {
        if self.composer.trim().is_empty() && self.attachment.is_none() {
            return false;
        }
        let post = Post {
            id: self.next_id,
            author: author.to_string(),
            body: self.composer.trim().to_string(),
            likes: 0,
            comments: 0,
            shares: 0,
            liked_by_me: false,
            media: self.attachment.take(),
            posted_at: Local::now(),
        };
        self.next_id += 1;
        self.posts.insert(0, post);
        self.composer.clear();
        true
    }

    pub fn attach(&mut self, kind: MediaKind) {
        let label = match kind {
            MediaKind::Image => "image attachment",
            MediaKind::Video => "video attachment",
        };
        self.attachment = Some(PostMedia {
            kind,
            label: label.to_string(),
        });
    }

    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }

    pub fn toggle_like(&mut self, id: u64) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            if post.liked_by_me {
                post.likes = post.likes.saturating_sub(1);
            } else {
                post.likes += 1;
            }
            post.liked_by_me = !post.liked_by_me;
        }
    }

    pub fn toggle_comments(&mut self, id: u64) {
        if !self.open_comments.remove(&id) {
            self.open_comments.insert(id);
        }
    }

    /// Submit the comment draft for a post. Empty drafts are a no-op.
    pub fn submit_comment(&mut self, id: u64) -> bool {
        let draft = self.comment_drafts.entry(id).or_default();
        if draft.trim().is_empty() {
            return false;
        }
        draft.clear();
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            post.comments += 1;
            return true;
        }
        false
    }

    pub fn share(&mut self, id: u64) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            post.shares += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_with_one_post() -> FeedState {
        let mut feed = FeedState::new();
        feed.set_posts(vec![Post {
            id: 1,
            author: "John Doe".to_string(),
            body: "Just started a new project!".to_string(),
            likes: 15,
            comments: 3,
            shares: 2,
            liked_by_me: false,
            media: None,
            posted_at: Local::now(),
        }]);
        feed
    }

    #[test]
    fn submit_prepends_and_clears_composer() {
        let mut feed = feed_with_one_post();
        feed.composer = "Hello network".to_string();

        assert!(feed.submit_post("Jane Smith"));
        assert_eq!(feed.posts.len(), 2);
        assert_eq!(feed.posts[0].author, "Jane Smith");
        assert_eq!(feed.posts[0].body, "Hello network");
        assert!(feed.composer.is_empty());
    }

    #[test]
    fn submit_with_empty_composer_is_noop() {
        let mut feed = feed_with_one_post();
        feed.composer = "   ".to_string();
        assert!(!feed.submit_post("Jane Smith"));
        assert_eq!(feed.posts.len(), 1);
    }

    #[test]
    fn attachment_alone_is_postable() {
        let mut feed = FeedState::new();
        feed.attach(MediaKind::Image);
        assert!(feed.submit_post("Jane Smith"));
        assert!(feed.posts[0].media.is_some());
        assert!(feed.attachment.is_none());
    }

    #[test]
    fn new_posts_get_fresh_ids() {
        let mut feed = feed_with_one_post();
        feed.composer = "one".to_string();
        feed.submit_post("Jane Smith");
        feed.composer = "two".to_string();
        feed.submit_post("Jane Smith");
        assert_ne!(feed.posts[0].id, feed.posts[1].id);
        assert_ne!(feed.posts[0].id, 1);
    }

    #[test]
    fn like_toggles_count_both_ways() {
        let mut feed = feed_with_one_post();
        feed.toggle_like(1);
        assert_eq!(feed.posts[0].likes, 16);
        assert!(feed.posts[0].liked_by_me);

        feed.toggle_like(1);
        assert_eq!(feed.posts[0].likes, 15);
        assert!(!feed.posts[0].liked_by_me);
    }

    #[test]
    fn comment_submit_bumps_count_and_clears_draft() {
        let mut feed = feed_with_one_post();
        feed.comment_drafts.insert(1, "Nice!".to_string());

        assert!(feed.submit_comment(1));
        assert_eq!(feed.posts[0].comments, 4);
        assert!(feed.comment_drafts[&1].is_empty());
    }

    #[test]
    fn empty_comment_is_noop() {
        let mut feed = feed_with_one_post();
        assert!(!feed.submit_comment(1));
        assert_eq!(feed.posts[0].comments, 3);
    }

    #[test]
    fn share_increments() {
        let mut feed = feed_with_one_post();
        feed.share(1);
        assert_eq!(feed.posts[0].shares, 3);
    }

    #[test]
    fn unknown_post_id_is_ignored() {
        let mut feed = feed_with_one_post();
        feed.toggle_like(99);
        feed.share(99);
        assert_eq!(feed.posts[0].likes, 15);
        assert_eq!(feed.posts[0].shares, 2);
    }
}
