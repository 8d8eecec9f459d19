//! Error types for the conversation surface.

/// Errors from the assistant front door.
///
/// The engine itself is total; these cover caller-side validation only.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
}
