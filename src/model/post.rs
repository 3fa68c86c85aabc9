use chrono::{DateTime, Local};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Placeholder attachment; the demo carries a label, not real bytes.
#[derive(Clone, Debug)]
pub struct PostMedia {
    pub kind: MediaKind,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub body: String,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub liked_by_me: bool,
    pub media: Option<PostMedia>,
    pub posted_at: DateTime<Local>,
}

impl Post {
    pub fn age_label(&self) -> String {
        relative_age(self.posted_at, Local::now())
    }
}

/// "just now", "5m ago", "2h ago", "3d ago".
pub fn relative_age(from: DateTime<Local>, now: DateTime<Local>) -> String {
    let minutes = (now - from).num_minutes().max(0);
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}
