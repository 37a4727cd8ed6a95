//! Trait definitions for completion providers, record stores and name sources.

use async_trait::async_trait;
use hamartia_core::{CharacterRecord, CompletionRequest, RecordField, RecordUpdate};
use hamartia_error::HamartiaResult;
use std::sync::Arc;

/// A chat completion provider.
///
/// One call to [`complete`](CompletionDriver::complete) makes at most one
/// outbound request. Drivers do not retry.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send `req` and return the text of the first choice.
    ///
    /// # Errors
    ///
    /// Fails with an empty-response error when the provider returns no text,
    /// and with transport or API errors when the call itself fails.
    async fn complete(&self, req: &CompletionRequest) -> HamartiaResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model used when the request does not override it.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: CompletionDriver + ?Sized> CompletionDriver for Arc<T> {
    async fn complete(&self, req: &CompletionRequest) -> HamartiaResult<String> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Key-value persistence for [`CharacterRecord`]s, keyed by `name`.
///
/// Operations are single-record atomic; there are no cross-record
/// transactions.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert or overwrite the record stored under `record.name`.
    async fn put(&self, record: &CharacterRecord) -> HamartiaResult<()>;

    /// Fetch the record stored under `name`, `None` if absent.
    async fn get(&self, name: &str) -> HamartiaResult<Option<CharacterRecord>>;

    /// Every stored record, in no particular order.
    async fn scan_all(&self) -> HamartiaResult<Vec<CharacterRecord>>;

    /// Merge `update` into the record stored under `name` and return the result.
    ///
    /// # Errors
    ///
    /// Fails with a not-found storage error when no record exists under `name`.
    async fn update(&self, name: &str, update: RecordUpdate) -> HamartiaResult<CharacterRecord>;

    /// Remove the record stored under `name`. Removing an absent key succeeds.
    async fn delete(&self, name: &str) -> HamartiaResult<()>;

    /// Records whose `field` equals `value` (tag membership for `categoryTags`).
    async fn find_by_field(
        &self,
        field: RecordField,
        value: &str,
    ) -> HamartiaResult<Vec<CharacterRecord>> {
        let records = self.scan_all().await?;
        Ok(records
            .into_iter()
            .filter(|r| r.matches(field, value))
            .collect())
    }

    /// Backend name for logging (e.g., "memory").
    fn backend_name(&self) -> &'static str;
}

/// Supplies the subject names for a batch run.
#[async_trait]
pub trait NameSource: Send + Sync {
    /// The names to analyze, in order.
    async fn names(&self) -> HamartiaResult<Vec<String>>;

    /// Short description for logging.
    fn describe(&self) -> String;
}
