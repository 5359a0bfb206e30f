use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::domain::entities::StoredBlob;
use crate::domain::value_objects::StorageKey;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Storage request timed out: {0}")]
    Timeout(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Port for the remote object store.
///
/// Implementations must be safe to share across concurrent requests; the
/// store itself serializes conflicting writes to the same key.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `data` under `key`, replacing any existing blob
    async fn put(&self, key: &StorageKey, data: Bytes, content_type: &str)
        -> Result<(), StorageError>;

    /// Check whether a blob exists at `key`
    async fn exists(&self, key: &StorageKey) -> Result<bool, StorageError>;

    /// Fetch current metadata for the blob at `key`
    async fn reload(&self, key: &StorageKey) -> Result<StoredBlob, StorageError>;

    /// Make the blob at `key` publicly readable. Idempotent.
    async fn publish(&self, key: &StorageKey) -> Result<(), StorageError>;

    /// Durable unauthenticated URL for `key`
    fn public_url(&self, key: &StorageKey) -> String;

    /// Enumerate every blob in the bucket, in store order
    async fn list(&self) -> Result<Vec<StoredBlob>, StorageError>;
}
