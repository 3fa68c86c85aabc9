use chrono::{DateTime, Local};

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub outgoing: bool,
    pub body: String,
    pub sent_at: DateTime<Local>,
}

#[derive(Clone, Debug)]
pub struct Conversation {
    pub id: u64,
    pub peer: String,
    pub transcript: Vec<ChatMessage>,
}

impl Conversation {
    /// The line shown in the conversation list.
    pub fn preview(&self) -> &str {
        self.transcript
            .last()
            .map(|m| m.body.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_last_message() {
        let conversation = Conversation {
            id: 1,
            peer: "Alice Johnson".to_string(),
            transcript: vec![
                ChatMessage {
                    outgoing: false,
                    body: "Hey, how are you?".to_string(),
                    sent_at: Local::now(),
                },
                ChatMessage {
                    outgoing: true,
                    body: "Doing well, thanks!".to_string(),
                    sent_at: Local::now(),
                },
            ],
        };
        assert_eq!(conversation.preview(), "Doing well, thanks!");
    }

    #[test]
    fn preview_of_empty_transcript() {
        let conversation = Conversation {
            id: 2,
            peer: "Bob Smith".to_string(),
            transcript: Vec::new(),
        };
        assert_eq!(conversation.preview(), "");
    }
}
