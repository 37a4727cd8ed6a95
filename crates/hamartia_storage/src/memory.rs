//! In-memory record store.

use async_trait::async_trait;
use hamartia_core::{CharacterRecord, RecordUpdate};
use hamartia_error::{HamartiaResult, StorageError, StorageErrorKind};
use hamartia_interface::RecordStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Record store backed by a shared `HashMap`.
///
/// Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<HashMap<String, CharacterRecord>>>,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    #[tracing::instrument(skip(self, record), fields(name = %record.name))]
    async fn put(&self, record: &CharacterRecord) -> HamartiaResult<()> {
        self.records
            .write()
            .await
            .insert(record.name.clone(), record.clone());
        tracing::debug!("Stored record");
        Ok(())
    }

    async fn get(&self, name: &str) -> HamartiaResult<Option<CharacterRecord>> {
        Ok(self.records.read().await.get(name).cloned())
    }

    async fn scan_all(&self) -> HamartiaResult<Vec<CharacterRecord>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    #[tracing::instrument(skip(self, update))]
    async fn update(&self, name: &str, update: RecordUpdate) -> HamartiaResult<CharacterRecord> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(name)
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(name.to_string())))?;
        record.apply(update);
        tracing::debug!("Updated record");
        Ok(record.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, name: &str) -> HamartiaResult<()> {
        let removed = self.records.write().await.remove(name).is_some();
        tracing::debug!(removed, "Deleted record");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
