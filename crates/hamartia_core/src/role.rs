//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
///
/// Serializes to the lowercase names used on the chat completions wire format.
///
/// # Examples
///
/// ```
/// use hamartia_core::Role;
///
/// assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
/// assert_eq!(format!("{}", Role::User), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixed instructions framing the task
    #[display("system")]
    System,
    /// The request itself
    #[display("user")]
    User,
    /// A model reply
    #[display("assistant")]
    Assistant,
}
