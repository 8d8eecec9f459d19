//! Chat session state.
//!
//! The session owns the two logs the engine never stores: the utterance
//! history (inputs only, in send order) and the display message log.
//! Everything lives in memory; dropping the session discards both.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed bot message that opens every new session.
pub const OPENING_MESSAGE: &str =
    "Hello! I'm your budget assistant. How can I help you manage your finances today?";

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the session's message log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    /// Epoch seconds.
    pub timestamp: i64,
}

impl ChatMessage {
    fn now(sender: Sender, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            sender,
            timestamp: Local::now().timestamp(),
        }
    }
}

/// A single in-memory conversation.
///
/// `history` holds only user utterances and only grows; it is never pruned
/// or deduplicated. The message log additionally carries bot replies for
/// display, starting with the fixed opening message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub started_at: i64,
    history: Vec<String>,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Create a fresh session seeded with the opening bot message.
    pub fn new() -> Self {
        let now = Local::now().timestamp();
        Self {
            id: Uuid::new_v4(),
            started_at: now,
            history: Vec::new(),
            messages: vec![ChatMessage::now(Sender::Bot, OPENING_MESSAGE.to_string())],
        }
    }

    /// Prior utterances in send order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The full display log, opening message included.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of logged messages, both senders.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub(crate) fn push_utterance(&mut self, utterance: &str) {
        self.history.push(utterance.to_string());
    }

    pub(crate) fn log_user(&mut self, content: &str) {
        self.messages
            .push(ChatMessage::now(Sender::User, content.to_string()));
    }

    pub(crate) fn log_bot(&mut self, content: String) -> ChatMessage {
        let message = ChatMessage::now(Sender::Bot, content);
        self.messages.push(message.clone());
        message
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
