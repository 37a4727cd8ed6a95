//! Completion provider integrations for Hamartia.
//!
//! Only OpenAI-compatible chat completion endpoints are supported. Any
//! server speaking that wire format (OpenAI itself, Groq, a local proxy)
//! works by pointing the client at its base URL.
//!
//! # Example
//!
//! ```no_run
//! use hamartia_models::OpenAICompatibleClient;
//! use hamartia_interface::CompletionDriver;
//! use hamartia_core::{CompletionRequest, Message};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAICompatibleClient::from_env("gpt-4o-mini")?;
//! let request = CompletionRequest::builder()
//!     .messages(vec![Message::user("Name one tragic hero.")])
//!     .build()?;
//! let text = client.complete(&request).await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChoiceMessage,
    OPENAI_API_KEY_VAR, OPENAI_BASE_URL, OpenAICompatibleClient,
};
