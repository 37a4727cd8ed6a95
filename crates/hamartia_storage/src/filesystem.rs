//! Filesystem-based record store.
//!
//! Each record is one pretty-printed JSON document named by the SHA-256 of
//! its key, so arbitrary character names map to safe file names.

use async_trait::async_trait;
use hamartia_core::{CharacterRecord, RecordUpdate};
use hamartia_error::{HamartiaResult, StorageError, StorageErrorKind};
use hamartia_interface::RecordStore;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Filesystem record store.
///
/// Layout: `{base_path}/{table}/{sha256(name)}.json`
///
/// Writes go to a uniquely named temp file that is then renamed over the
/// target, so a reader sees either the old or the new record. Within one
/// process, read-modify-write (`update`) is serialized by a lock; separate
/// processes sharing a directory get last-writer-wins.
#[derive(Debug)]
pub struct FileSystemRecordStore {
    table_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSystemRecordStore {
    /// Open (creating if needed) the table directory `base_path/table`.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>, table: &str) -> HamartiaResult<Self> {
        let table_path = base_path.into().join(table);

        std::fs::create_dir_all(&table_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                table_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %table_path.display(), "Opened filesystem record store");
        Ok(Self {
            table_path,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory holding this table's documents.
    pub fn table_path(&self) -> &Path {
        &self.table_path
    }

    fn compute_hash(key: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.table_path
            .join(format!("{}.json", Self::compute_hash(name)))
    }

    async fn read_record(path: &Path) -> HamartiaResult<Option<CharacterRecord>> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        let record = serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(Some(record))
    }

    async fn write_record(&self, record: &CharacterRecord) -> HamartiaResult<()> {
        let path = self.record_path(&record.name);
        let data = serde_json::to_vec_pretty(record)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialization(e.to_string())))?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self
            .table_path
            .join(format!(".{}.tmp", Uuid::new_v4()));
        tokio::fs::write(&temp_path, &data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into());
        }

        tracing::info!(
            name = %record.name,
            path = %path.display(),
            size = data.len(),
            "Stored record"
        );
        Ok(())
    }
}

#[async_trait]
impl RecordStore for FileSystemRecordStore {
    #[tracing::instrument(skip(self, record), fields(name = %record.name))]
    async fn put(&self, record: &CharacterRecord) -> HamartiaResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write_record(record).await
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, name: &str) -> HamartiaResult<Option<CharacterRecord>> {
        let record = Self::read_record(&self.record_path(name)).await?;
        tracing::debug!(found = record.is_some(), "Looked up record");
        Ok(record)
    }

    #[tracing::instrument(skip(self), fields(path = %self.table_path.display()))]
    async fn scan_all(&self) -> HamartiaResult<Vec<CharacterRecord>> {
        let mut entries = tokio::fs::read_dir(&self.table_path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Transport(format!(
                "{}: {}",
                self.table_path.display(),
                e
            )))
        })?;

        let mut records = Vec::new();
        loop {
            let entry = entries.next_entry().await.map_err(|e| {
                StorageError::new(StorageErrorKind::Transport(format!(
                    "{}: {}",
                    self.table_path.display(),
                    e
                )))
            })?;
            let Some(entry) = entry else { break };

            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            // A concurrent delete may remove the file between listing and reading
            if let Some(record) = Self::read_record(&path).await? {
                records.push(record);
            }
        }

        tracing::debug!(count = records.len(), "Scanned records");
        Ok(records)
    }

    #[tracing::instrument(skip(self, update))]
    async fn update(&self, name: &str, update: RecordUpdate) -> HamartiaResult<CharacterRecord> {
        let _guard = self.write_lock.lock().await;

        let mut record = Self::read_record(&self.record_path(name))
            .await?
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(name.to_string())))?;
        record.apply(update);
        self.write_record(&record).await?;
        Ok(record)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, name: &str) -> HamartiaResult<()> {
        let _guard = self.write_lock.lock().await;
        let path = self.record_path(name);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Deleted record");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Record already absent");
                Ok(())
            }
            Err(e) => Err(StorageError::new(StorageErrorKind::Transport(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
