//! Assistant front door: validates input and keeps the session in step with
//! the engine.
//!
//! The append-before-respond ordering lives here: a valid utterance is
//! logged, pushed onto the history, and only then handed to the engine
//! together with that history. Rejected input leaves the session untouched.

use tracing::debug;

use coinwise_core::config::ChatConfig;

use crate::engine::ResponseEngine;
use crate::error::ChatError;
use crate::session::{ChatMessage, ChatSession};

/// Default cap on a single message, in bytes.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 2000;

/// Wires the response engine to a session, enforcing the caller-side guards.
pub struct Assistant {
    engine: ResponseEngine,
    enabled: bool,
    max_message_length: usize,
}

impl Assistant {
    /// Create an enabled assistant with the default message cap.
    pub fn new() -> Self {
        Self {
            engine: ResponseEngine::new(),
            enabled: true,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }

    /// Create an assistant from the chat configuration section.
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            engine: ResponseEngine::new(),
            enabled: config.enabled,
            max_message_length: config.max_message_length,
        }
    }

    /// Handle one user turn and return the bot's logged reply.
    ///
    /// Empty and whitespace-only input is rejected before anything is
    /// logged or appended; the same holds for over-long input and for a
    /// disabled assistant.
    pub fn handle_message(
        &self,
        session: &mut ChatSession,
        input: &str,
    ) -> Result<ChatMessage, ChatError> {
        if !self.enabled {
            return Err(ChatError::Disabled);
        }
        if input.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if input.len() > self.max_message_length {
            return Err(ChatError::MessageTooLong(self.max_message_length));
        }

        session.log_user(input);
        session.push_utterance(input);
        debug!(session = %session.id, turns = session.history().len(), "handling message");

        let reply = self.engine.respond(input, session.history());
        Ok(session.log_bot(reply))
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Sender;

    fn assistant() -> Assistant {
        Assistant::new()
    }

    #[test]
    fn test_valid_turn_logs_both_sides() {
        let mut session = ChatSession::new();
        let reply = assistant()
            .handle_message(&mut session, "budget tips please")
            .unwrap();

        assert_eq!(reply.sender, Sender::Bot);
        assert!(reply.content.starts_with("Here are some budgeting tips"));
        // Opening message + user turn + bot reply.
        assert_eq!(session.message_count(), 3);
        assert_eq!(session.history(), &["budget tips please"]);
    }

    #[test]
    fn test_empty_input_rejected_untouched() {
        let mut session = ChatSession::new();
        let err = assistant().handle_message(&mut session, "").unwrap_err();
        assert!(matches!(err, ChatError::EmptyMessage));
        assert_eq!(session.message_count(), 1);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_whitespace_input_rejected_untouched() {
        let mut session = ChatSession::new();
        let err = assistant().handle_message(&mut session, "   \t ").unwrap_err();
        assert!(matches!(err, ChatError::EmptyMessage));
        assert_eq!(session.message_count(), 1);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_too_long_input_rejected() {
        let config = ChatConfig {
            enabled: true,
            max_message_length: 10,
            thinking_delay_ms: 0,
        };
        let assistant = Assistant::from_config(&config);
        let mut session = ChatSession::new();
        let err = assistant
            .handle_message(&mut session, "this is far too long")
            .unwrap_err();
        assert!(matches!(err, ChatError::MessageTooLong(10)));
        assert_eq!(session.message_count(), 1);
    }

    #[test]
    fn test_disabled_rejects_everything() {
        let config = ChatConfig {
            enabled: false,
            max_message_length: 2000,
            thinking_delay_ms: 0,
        };
        let assistant = Assistant::from_config(&config);
        let mut session = ChatSession::new();
        let err = assistant.handle_message(&mut session, "hello").unwrap_err();
        assert!(matches!(err, ChatError::Disabled));
    }

    #[test]
    fn test_history_carries_across_turns() {
        let mut session = ChatSession::new();
        let assistant = assistant();

        assistant
            .handle_message(&mut session, "I want to save money")
            .unwrap();
        // Short follow-up with no topic of its own: the prior turn decides.
        let reply = assistant.handle_message(&mut session, "ok").unwrap();
        assert!(reply.content.starts_with("On the subject of saving"));
        assert_eq!(session.history(), &["I want to save money", "ok"]);
    }

    #[test]
    fn test_replies_are_never_empty() {
        let mut session = ChatSession::new();
        let assistant = assistant();
        for input in ["hello", "???", "qwerty", "budget", "ok"] {
            let reply = assistant.handle_message(&mut session, input).unwrap();
            assert!(!reply.content.is_empty(), "empty reply for {:?}", input);
        }
    }

    #[test]
    fn test_from_config_respects_limits() {
        let config = ChatConfig::default();
        let assistant = Assistant::from_config(&config);
        let mut session = ChatSession::new();
        let long = "x".repeat(config.max_message_length + 1);
        assert!(assistant.handle_message(&mut session, &long).is_err());
    }
}
