// Seed data for the demo - everything lives in memory, nothing is fetched

use crate::model::{ChatMessage, Connection, Conversation, JobPosting, Notification, Post};
use chrono::{Duration, Local};

pub fn posts() -> Vec<Post> {
    let now = Local::now();
    vec![
        Post {
            id: 1,
            author: "John Doe".to_string(),
            body: "Just started a new project! #excited #newbeginnings".to_string(),
            likes: 15,
            comments: 3,
            shares: 2,
            liked_by_me: false,
            media: None,
            posted_at: now - Duration::hours(2),
        },
        Post {
            id: 2,
            author: "Jane Smith".to_string(),
            body: "Excited about my new job at Tech Co! Looking forward to new challenges \
                   and opportunities. #newjob #techcareer"
                .to_string(),
            likes: 22,
            comments: 5,
            shares: 1,
            liked_by_me: false,
            media: None,
            posted_at: now - Duration::hours(5),
        },
    ]
}

pub fn connections() -> Vec<Connection> {
    let card = |id, name: &str, headline: &str, connected| Connection {
        id,
        name: name.to_string(),
        headline: headline.to_string(),
        connected,
    };
    vec![
        card(1, "Alice Johnson", "UX Designer", false),
        card(2, "Bob Smith", "Frontend Developer", true),
        card(3, "Charlie Brown", "Product Manager", false),
        card(4, "Diana Ross", "Data Scientist", true),
    ]
}

pub fn jobs() -> Vec<JobPosting> {
    let listing = |id, title: &str, company: &str, location: &str, salary: &str| JobPosting {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        applied: false,
    };
    vec![
        listing(1, "Frontend Developer", "Tech Co", "San Francisco, CA", "$100k - $150k"),
        listing(2, "UX Designer", "Design Inc", "New York, NY", "$90k - $120k"),
        listing(3, "Data Scientist", "Data Corp", "Seattle, WA", "$120k - $180k"),
        listing(4, "Product Manager", "Startup Ltd", "Austin, TX", "$110k - $160k"),
    ]
}

pub fn conversations() -> Vec<Conversation> {
    let now = Local::now();
    let opener = |id, peer: &str, body: &str, age_hours| Conversation {
        id,
        peer: peer.to_string(),
        transcript: vec![ChatMessage {
            outgoing: false,
            body: body.to_string(),
            sent_at: now - Duration::hours(age_hours),
        }],
    };
    vec![
        opener(1, "Alice Johnson", "Hey, how are you?", 1),
        opener(2, "Bob Smith", "Can we schedule a meeting?", 3),
        opener(3, "Charlie Brown", "Thanks for your help!", 8),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let row = |id, actor: &str, action: &str, age: &str| Notification {
        id,
        actor: actor.to_string(),
        action: action.to_string(),
        age: age.to_string(),
        read: false,
    };
    vec![
        row(1, "Alice Johnson", "liked your post", "2h ago"),
        row(2, "Bob Smith", "commented on your post", "4h ago"),
        row(3, "Charlie Brown", "shared your post", "1d ago"),
        row(4, "Diana Ross", "viewed your profile", "2d ago"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let post_ids: HashSet<_> = posts().iter().map(|p| p.id).collect();
        assert_eq!(post_ids.len(), posts().len());

        let job_ids: HashSet<_> = jobs().iter().map(|j| j.id).collect();
        assert_eq!(job_ids.len(), jobs().len());
    }

    #[test]
    fn conversations_open_with_an_incoming_message() {
        for conversation in conversations() {
            assert!(!conversation.transcript.is_empty());
            assert!(!conversation.transcript[0].outgoing);
        }
    }

    #[test]
    fn seeded_notifications_start_unread() {
        assert!(notifications().iter().all(|n| !n.read));
    }
}
