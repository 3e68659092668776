//! In-memory file store.

use async_trait::async_trait;
use quote_core::{AssistantError, FilePurpose, FileStore, StoredFile};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// A file store that reads the local file and hands out sequential ids.
///
/// Mirrors the provider's behaviour: every upload creates a new object,
/// even for a path that was uploaded before.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    uploads: Mutex<Vec<(PathBuf, StoredFile)>>,
}

impl MemoryFileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every upload so far, in order.
    pub async fn uploads(&self) -> Vec<(PathBuf, StoredFile)> {
        self.uploads.lock().await.clone()
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn upload_file(
        &self,
        path: &Path,
        purpose: FilePurpose,
    ) -> Result<StoredFile, AssistantError> {
        let bytes = tokio::fs::read(path).await?;

        let mut uploads = self.uploads.lock().await;
        let stored = StoredFile {
            id: format!("file-mock-{}", uploads.len() + 1),
            filename: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            bytes: bytes.len() as u64,
            purpose: purpose.as_str().to_string(),
        };
        uploads.push((path.to_path_buf(), stored.clone()));

        Ok(stored)
    }
}
