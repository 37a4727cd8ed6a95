//! OpenAI-compatible chat completions client.

use super::conversion::{self, Defaults};
use super::dto::ChatResponse;
use async_trait::async_trait;
use hamartia_core::CompletionRequest;
use hamartia_error::{
    CompletionError, CompletionErrorKind, ConfigError, HamartiaResult, HttpError,
};
use hamartia_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Environment variable holding the API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Default API root.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for `POST {base_url}/chat/completions`.
///
/// Makes exactly one request per [`complete`](CompletionDriver::complete)
/// call and never retries.
#[derive(Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    provider: &'static str,
    defaults: Defaults,
}

impl std::fmt::Debug for OpenAICompatibleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAICompatibleClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

impl OpenAICompatibleClient {
    /// Creates a client reading the key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset or blank.
    pub fn from_env(model: impl AsRef<str>) -> HamartiaResult<Self> {
        Self::from_key(std::env::var(OPENAI_API_KEY_VAR).ok(), model)
    }

    /// Creates a client from a key lookup, where `None` means the key is unset.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is unset or blank.
    #[instrument(skip(api_key, model), fields(model = %model.as_ref(), key_present = api_key.is_some()))]
    pub fn from_key(api_key: Option<String>, model: impl AsRef<str>) -> HamartiaResult<Self> {
        let api_key = api_key
            .ok_or_else(|| ConfigError::new(format!("{} is not set", OPENAI_API_KEY_VAR)))?;
        Self::with_api_key(api_key, model)
    }

    /// Creates a client with an explicit key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is blank.
    #[instrument(skip(api_key, model), fields(model = %model.as_ref()))]
    pub fn with_api_key(api_key: impl Into<String>, model: impl AsRef<str>) -> HamartiaResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::new(format!("{} is empty", OPENAI_API_KEY_VAR)).into());
        }

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            model: model.as_ref().to_string(),
            provider: "openai",
            defaults: Defaults {
                temperature: None,
                max_tokens: None,
            },
        })
    }

    /// Point the client at another OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Provider label used in logs.
    pub fn with_provider(mut self, provider: &'static str) -> Self {
        self.provider = provider;
        self
    }

    /// Sampling parameters used when a request leaves them unset.
    pub fn with_defaults(mut self, temperature: Option<f32>, max_tokens: Option<u32>) -> Self {
        self.defaults = Defaults {
            temperature,
            max_tokens,
        };
        self
    }

    /// Full endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionDriver for OpenAICompatibleClient {
    #[instrument(skip(self, req), fields(provider = self.provider, model = %self.model, messages = req.messages.len()))]
    async fn complete(&self, req: &CompletionRequest) -> HamartiaResult<String> {
        let chat_request = conversion::to_chat_request(req, &self.model, self.defaults)?;

        let url = self.endpoint();
        debug!(url = %url, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let kind = conversion::status_error(status.as_u16(), &body);
            warn!(status = status.as_u16(), error = %kind, "Completion request rejected");
            return Err(CompletionError::new(kind).into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            CompletionError::new(CompletionErrorKind::ResponseParsing(e.to_string()))
        })?;

        let text = conversion::first_choice_text(chat_response)?;
        debug!(chars = text.len(), "Received completion");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
