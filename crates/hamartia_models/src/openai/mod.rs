//! OpenAI chat completions client.

mod client;
mod conversion;
mod dto;

pub use client::{OPENAI_API_KEY_VAR, OPENAI_BASE_URL, OpenAICompatibleClient};
pub use dto::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChoiceMessage,
};
