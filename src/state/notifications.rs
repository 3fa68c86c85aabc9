// Notifications state - the list and its unread badge

use crate::model::Notification;

pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Opening the notifications view marks everything read.
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NotificationsState {
        NotificationsState::new(vec![
            Notification {
                id: 1,
                actor: "Alice Johnson".to_string(),
                action: "liked your post".to_string(),
                age: "2h ago".to_string(),
                read: false,
            },
            Notification {
                id: 2,
                actor: "Bob Smith".to_string(),
                action: "commented on your post".to_string(),
                age: "4h ago".to_string(),
                read: true,
            },
        ])
    }

    #[test]
    fn unread_count_skips_read_items() {
        let notifications = sample();
        assert_eq!(notifications.unread_count(), 1);
    }

    #[test]
    fn mark_all_read_clears_badge() {
        let mut notifications = sample();
        notifications.mark_all_read();
        assert_eq!(notifications.unread_count(), 0);
    }
}
