//! Conversions between Hamartia and chat completions types.

use super::dto::{ApiErrorBody, ChatMessage, ChatRequest, ChatResponse};
use hamartia_core::CompletionRequest;
use hamartia_error::{BuilderError, BuilderErrorKind, CompletionError, CompletionErrorKind};

/// Sampling defaults applied when a request leaves them unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Defaults {
    pub(crate) temperature: Option<f32>,
    pub(crate) max_tokens: Option<u32>,
}

/// Converts a [`CompletionRequest`] to the wire request.
pub(crate) fn to_chat_request(
    request: &CompletionRequest,
    model: &str,
    defaults: Defaults,
) -> Result<ChatRequest, BuilderError> {
    let messages: Vec<ChatMessage> = request
        .messages
        .iter()
        .map(|m| ChatMessage::new(m.role, m.content.clone()))
        .collect();

    let model = request.model.clone().unwrap_or_else(|| model.to_string());

    ChatRequest::builder()
        .model(model)
        .messages(messages)
        .temperature(request.temperature.or(defaults.temperature))
        .max_tokens(request.max_tokens.or(defaults.max_tokens))
        .build()
        .map_err(|e| {
            BuilderError::new(BuilderErrorKind::MissingField(format!(
                "Failed to build chat request: {}",
                e
            )))
        })
}

/// Text of the first choice.
///
/// Missing choices, null content and blank content are all empty responses.
pub(crate) fn first_choice_text(response: ChatResponse) -> Result<String, CompletionError> {
    response
        .choices()
        .first()
        .and_then(|choice| choice.message().content().clone())
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| CompletionError::new(CompletionErrorKind::EmptyResponse))
}

/// Maps a non-success status and body to an error kind.
pub(crate) fn status_error(status: u16, body: &str) -> CompletionErrorKind {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    if status == 429 {
        CompletionErrorKind::RateLimited(message)
    } else {
        CompletionErrorKind::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamartia_core::Message;

    fn defaults() -> Defaults {
        Defaults {
            temperature: Some(0.7),
            max_tokens: Some(7000),
        }
    }

    #[test]
    fn request_inherits_defaults() {
        let request = CompletionRequest::builder()
            .messages(vec![Message::system("sys"), Message::user("Hamlet")])
            .build()
            .unwrap();

        let chat = to_chat_request(&request, "gpt-4o-mini", defaults()).unwrap();
        let value = serde_json::to_value(&chat).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["max_tokens"], 7000);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "Hamlet");
    }

    #[test]
    fn request_overrides_win() {
        let request = CompletionRequest::builder()
            .messages(vec![Message::user("x")])
            .max_tokens(200u32)
            .model("gpt-4o")
            .build()
            .unwrap();

        let chat = to_chat_request(&request, "gpt-4o-mini", defaults()).unwrap();
        assert_eq!(chat.model(), "gpt-4o");
        assert_eq!(*chat.max_tokens(), Some(200));
    }

    #[test]
    fn unset_parameters_are_omitted() {
        let request = CompletionRequest::builder()
            .messages(vec![Message::user("x")])
            .build()
            .unwrap();
        let none = Defaults {
            temperature: None,
            max_tokens: None,
        };

        let value = serde_json::to_value(to_chat_request(&request, "m", none).unwrap()).unwrap();
        assert!(value.get("temperature").is_none());
        assert!(value.get("max_tokens").is_none());
    }

    #[test]
    fn null_content_is_empty_response() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{ "index": 0, "message": { "content": null } }]
        }))
        .unwrap();

        let err = first_choice_text(response).unwrap_err();
        assert_eq!(err.kind, CompletionErrorKind::EmptyResponse);
    }

    #[test]
    fn no_choices_is_empty_response() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(first_choice_text(response).is_err());
    }

    #[test]
    fn status_error_reads_envelope() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            status_error(401, body),
            CompletionErrorKind::Api {
                status: 401,
                message: "Incorrect API key provided".to_string()
            }
        );
    }

    #[test]
    fn status_429_is_rate_limited() {
        assert_eq!(
            status_error(429, "slow down"),
            CompletionErrorKind::RateLimited("slow down".to_string())
        );
    }
}
