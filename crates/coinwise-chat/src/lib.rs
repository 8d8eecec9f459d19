//! Rule-based budget assistant for coinwise.
//!
//! Provides the response-selection engine (a fixed-priority rule chain over
//! the user's utterance and history), the in-memory conversation session,
//! and the validation front door used by the binary.

pub mod assistant;
pub mod context;
pub mod engine;
pub mod error;
pub mod rules;
pub mod session;
pub mod wisdom;

pub use assistant::Assistant;
pub use engine::ResponseEngine;
pub use error::ChatError;
pub use rules::Topic;
pub use session::{ChatMessage, ChatSession, Sender};
