// Messaging state - conversation list, selection, and the draft box

use crate::model::{ChatMessage, Conversation};
use chrono::Local;

pub struct MessagingState {
    pub conversations: Vec<Conversation>,
    pub selected: Option<u64>,
    pub draft: String,
}

impl MessagingState {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self {
            conversations,
            selected: None,
            draft: String::new(),
        }
    }

    pub fn select(&mut self, id: u64) {
        if self.conversations.iter().any(|c| c.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let id = self.selected?;
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Append the draft to the selected conversation as an outgoing
    /// message. Empty draft or no selection is a no-op.
    pub fn send_draft(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        let Some(id) = self.selected else {
            return false;
        };
        let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        conversation.transcript.push(ChatMessage {
            outgoing: true,
            body: self.draft.trim().to_string(),
            sent_at: Local::now(),
        });
        self.draft.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MessagingState {
        MessagingState::new(vec![Conversation {
            id: 1,
            peer: "Alice Johnson".to_string(),
            transcript: vec![ChatMessage {
                outgoing: false,
                body: "Hey, how are you?".to_string(),
                sent_at: Local::now(),
            }],
        }])
    }

    #[test]
    fn select_requires_known_conversation() {
        let mut messaging = sample();
        messaging.select(42);
        assert_eq!(messaging.selected, None);
        messaging.select(1);
        assert_eq!(messaging.selected, Some(1));
    }

    #[test]
    fn send_appends_outgoing_and_updates_preview() {
        let mut messaging = sample();
        messaging.select(1);
        messaging.draft = "Doing great!".to_string();

        assert!(messaging.send_draft());
        let conversation = messaging.selected_conversation().unwrap();
        assert_eq!(conversation.transcript.len(), 2);
        assert!(conversation.transcript[1].outgoing);
        assert_eq!(conversation.preview(), "Doing great!");
        assert!(messaging.draft.is_empty());
    }

    #[test]
    fn send_without_selection_is_noop() {
        let mut messaging = sample();
        messaging.draft = "Hello?".to_string();
        assert!(!messaging.send_draft());
        assert_eq!(messaging.conversations[0].transcript.len(), 1);
    }

    #[test]
    fn empty_draft_is_noop() {
        let mut messaging = sample();
        messaging.select(1);
        messaging.draft = "  ".to_string();
        assert!(!messaging.send_draft());
        assert_eq!(messaging.conversations[0].transcript.len(), 1);
    }
}
