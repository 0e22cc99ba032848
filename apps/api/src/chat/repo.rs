//! Chat history: append-only, except for the clear operation which resets
//! to the single welcome message.

use chrono::{Local, Utc};

use crate::models::chat::{ChatMessage, ChatRole};
use crate::models::document::Document;

pub struct NewChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Display time; defaults to the local clock at append time.
    pub time: Option<String>,
}

/// All messages, ascending by creation timestamp.
pub fn sorted(doc: &Document) -> Vec<ChatMessage> {
    let mut messages = doc.chat_messages.clone();
    messages.sort_by_key(|m| m.created_at);
    messages
}

pub fn append(doc: &mut Document, new: NewChatMessage) -> ChatMessage {
    let id = doc.next_chat_id;
    let message = ChatMessage {
        id,
        role: new.role,
        content: new.content,
        time: new
            .time
            .unwrap_or_else(|| Local::now().format("%I:%M %p").to_string()),
        created_at: Utc::now(),
    };
    doc.chat_messages.push(message.clone());
    doc.next_chat_id = id + 1;
    message
}

/// Drops the whole history, reseeds the welcome message (id 1), and resets
/// the counter so the next append gets id 2.
pub fn clear(doc: &mut Document) {
    doc.chat_messages = vec![ChatMessage::welcome()];
    doc.next_chat_id = 2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::WELCOME_TEXT;

    fn message(content: &str) -> NewChatMessage {
        NewChatMessage {
            role: ChatRole::User,
            content: content.to_string(),
            time: None,
        }
    }

    #[test]
    fn test_append_allocates_sequential_ids() {
        let mut doc = Document::seed();
        let first = append(&mut doc, message("hello"));
        let second = append(&mut doc, message("again"));
        assert_eq!(first.id, 2);
        assert_eq!(second.id, 3);
        assert_eq!(doc.next_chat_id, 4);
    }

    #[test]
    fn test_append_keeps_supplied_display_time() {
        let mut doc = Document::seed();
        let msg = append(
            &mut doc,
            NewChatMessage {
                time: Some("09:30 AM".to_string()),
                ..message("with time")
            },
        );
        assert_eq!(msg.time, "09:30 AM");
    }

    #[test]
    fn test_append_defaults_display_time_to_clock_format() {
        let mut doc = Document::seed();
        let msg = append(&mut doc, message("no time"));
        // "%I:%M %p" → e.g. "02:15 PM"
        assert_eq!(msg.time.len(), 8);
        assert!(msg.time.ends_with("AM") || msg.time.ends_with("PM"));
    }

    #[test]
    fn test_clear_resets_to_single_welcome_message() {
        let mut doc = Document::seed();
        append(&mut doc, message("one"));
        append(&mut doc, message("two"));

        clear(&mut doc);

        assert_eq!(doc.chat_messages.len(), 1);
        let welcome = &doc.chat_messages[0];
        assert_eq!(welcome.id, 1);
        assert_eq!(welcome.role, ChatRole::Ai);
        assert_eq!(welcome.content, WELCOME_TEXT);
        assert_eq!(welcome.time, "12:01 PM");

        let next = append(&mut doc, message("fresh start"));
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_sorted_orders_by_creation_time() {
        let mut doc = Document::seed();
        append(&mut doc, message("a"));
        append(&mut doc, message("b"));
        let ordered = sorted(&doc);
        for pair in ordered.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
    }
}
