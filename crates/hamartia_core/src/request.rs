//! Completion request type.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Provider-agnostic chat completion request.
///
/// Unset sampling parameters fall back to whatever the driver was
/// configured with.
///
/// # Examples
///
/// ```
/// use hamartia_core::{CompletionRequest, Message};
///
/// let request = CompletionRequest::builder()
///     .messages(vec![Message::system("Be terse."), Message::user("Hello")])
///     .temperature(0.7f32)
///     .max_tokens(7000u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 2);
/// assert_eq!(request.model, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into, strip_option), default)]
pub struct CompletionRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Model identifier override
    pub model: Option<String>,
}

impl CompletionRequest {
    /// Creates a new request builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// Text of the last user message, if any.
    pub fn last_user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == crate::Role::User)
            .map(|m| m.content.as_str())
    }
}
