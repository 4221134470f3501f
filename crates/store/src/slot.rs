//! Storage-slot backends.
//!
//! A slot is one named durable cell holding a single string value -- the
//! serialized pet collection. [`FileSlot`] keeps it in a JSON file;
//! [`MemorySlot`] keeps it in memory for tests and ephemeral sessions.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;

/// One named slot in a durable key-value medium.
#[async_trait]
pub trait StorageSlot: Send + Sync {
    /// Current slot value, `None` when nothing has been stored yet.
    async fn read(&self) -> Result<Option<String>, StoreError>;

    /// Overwrite the slot value in a single write.
    async fn write(&self, value: &str) -> Result<(), StoreError>;
}

/// File-backed slot: the value is the file's entire contents.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StorageSlot for FileSlot {
    async fn read(&self) -> Result<Option<String>, StoreError> {
        if tokio::fs::metadata(&self.path).await.is_err() {
            return Ok(None);
        }
        let value = tokio::fs::read_to_string(&self.path).await?;
        Ok(Some(value))
    }

    async fn write(&self, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, value).await?;
        Ok(())
    }
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageSlot for MemorySlot {
    async fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value.lock().expect("slot mutex poisoned").clone())
    }

    async fn write(&self, value: &str) -> Result<(), StoreError> {
        *self.value.lock().expect("slot mutex poisoned") = Some(value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
