use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::application::dto::{UploadOutcome, UploadRequest, UploadResponse, UploadedFileDto};
use crate::application::ports::{BlobStore, StorageError};
use crate::domain::entities::StoredBlob;
use crate::domain::errors::DomainError;
use crate::domain::validation::UploadValidator;
use crate::domain::value_objects::{sanitize_filename, NamingMode, StorageKey};
use crate::infrastructure::storage::ContentHasher;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Use case: Upload a file, deduplicating by content unless the caller asks
/// to keep the original name
pub struct UploadFileUseCase {
    blob_store: Arc<dyn BlobStore>,
}

impl UploadFileUseCase {
    pub fn new(blob_store: Arc<dyn BlobStore>) -> Self {
        Self { blob_store }
    }

    /// Execute upload workflow
    #[tracing::instrument(skip(self, request), fields(
        filename = %request.filename,
        size = request.size(),
        mode = %request.naming_mode,
    ))]
    pub async fn execute(&self, request: UploadRequest) -> Result<UploadResponse, UploadError> {
        // 1. Validate before any store call
        let extension = UploadValidator::validate(&request.filename, request.size())?;
        let original_filename = sanitize_filename(&request.filename);

        // 2. Choose the key
        let key = match request.naming_mode {
            NamingMode::ContentAddressed => {
                let hash = ContentHasher::hash_bytes(&request.data);
                let file_name = format!("{}.{}", hash.key_segment(), extension);
                StorageKey::new(request.folder.as_deref(), &file_name)
            }
            NamingMode::OriginalName => {
                StorageKey::new(request.folder.as_deref(), &original_filename)
            }
        };

        // 3. Existence check, dedup mode only. Original-name uploads always
        //    overwrite.
        let existing = if request.naming_mode.is_deduplicated()
            && self.blob_store.exists(&key).await?
        {
            Some(self.blob_store.reload(&key).await?)
        } else {
            None
        };

        // 4. Transfer bytes unless identical content is already stored
        let (outcome, mut blob) = match existing {
            Some(blob) => {
                info!(key = %key, "Identical content already stored, skipping upload");
                (UploadOutcome::AlreadyExists, blob)
            }
            None => {
                let content_type = request.content_type_or_default().to_string();
                self.blob_store
                    .put(&key, request.data.clone(), &content_type)
                    .await?;
                info!(key = %key, "Blob uploaded");
                (
                    UploadOutcome::Uploaded,
                    StoredBlob::new(key.clone(), request.size(), content_type),
                )
            }
        };

        // 5. Publish (idempotent, so also applied to dedup hits)
        self.blob_store.publish(&key).await?;
        blob.mark_published(self.blob_store.public_url(&key));

        // 6. Respond
        let data = UploadedFileDto::from_blob(&blob, original_filename, &request);
        Ok(UploadResponse::new(outcome, data))
    }
}
