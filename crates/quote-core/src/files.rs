//! Provider-side file storage.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AssistantError;

/// Purpose tag attached to an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilePurpose {
    /// Arbitrary user data referenced later from prompts.
    UserData,
}

impl FilePurpose {
    /// Wire name of the purpose.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilePurpose::UserData => "user_data",
        }
    }
}

/// A file object as reported by the storage endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Opaque identifier used to reference the file in later prompts.
    pub id: String,
    /// Original file name.
    #[serde(default)]
    pub filename: String,
    /// Size in bytes.
    #[serde(default)]
    pub bytes: u64,
    /// Purpose string echoed by the provider.
    #[serde(default)]
    pub purpose: String,
}

/// A remote file-storage endpoint.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Upload the local file at `path`. Every call creates a new stored object.
    async fn upload_file(
        &self,
        path: &Path,
        purpose: FilePurpose,
    ) -> Result<StoredFile, AssistantError>;
}

#[async_trait]
impl<T: FileStore + ?Sized> FileStore for std::sync::Arc<T> {
    async fn upload_file(
        &self,
        path: &Path,
        purpose: FilePurpose,
    ) -> Result<StoredFile, AssistantError> {
        (**self).upload_file(path, purpose).await
    }
}
