//! Message types for chat completions.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a chat completion request.
///
/// # Examples
///
/// ```
/// use hamartia_core::{Message, Role};
///
/// let message = Message::user("Analyze Hamlet");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "Analyze Hamlet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The message text
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
