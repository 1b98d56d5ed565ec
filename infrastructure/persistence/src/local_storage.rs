use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.io_error")]
    Io,
    #[error("storage.corrupted")]
    Corrupted,
}

/// Durable string key/value store, the same shape as a browser's `localStorage`.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Configuration for the file-backed storage
pub struct StorageConfig {
    pub path: PathBuf,
}

impl StorageConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Opens the storage file, creating its parent directory when needed
pub async fn open_file_storage(config: &StorageConfig) -> Result<FileLocalStorage, StorageError> {
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|_| StorageError::Io)?;
    }

    Ok(FileLocalStorage {
        path: config.path.clone(),
        lock: Mutex::new(()),
    })
}

/// All keys live in one JSON object on disk. Writes go through a temporary
/// file and a rename so a crash never leaves a half-written file behind.
pub struct FileLocalStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileLocalStorage {
    async fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|_| StorageError::Corrupted),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(_) => Err(StorageError::Io),
        }
    }

    async fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(items).map_err(|_| StorageError::Corrupted)?;
        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, raw).await.map_err(|_| StorageError::Io)?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|_| StorageError::Io)
    }
}

#[async_trait]
impl LocalStorage for FileLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        let items = self.read_all().await?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut items = match self.read_all().await {
            Err(StorageError::Corrupted) => {
                tracing::warn!(path = %self.path.display(), "storage file unreadable, overwriting");
                BTreeMap::new()
            }
            other => other?,
        };
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items).await?;

        tracing::debug!(key, path = %self.path.display(), "storage item written");
        Ok(())
    }
}

/// Process-local storage, lost on exit.
#[derive(Default)]
pub struct MemoryLocalStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStorage for MemoryLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
