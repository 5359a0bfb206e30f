use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{FileDto, ListResponse};
use crate::application::ports::{BlobStore, StorageError};

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Use case: List every stored file.
///
/// Best-effort pass-through of the store's enumeration: no pagination, no
/// filtering and no ordering guarantee. A large bucket yields a large
/// single response.
pub struct ListFilesUseCase {
    blob_store: Arc<dyn BlobStore>,
}

impl ListFilesUseCase {
    pub fn new(blob_store: Arc<dyn BlobStore>) -> Self {
        Self { blob_store }
    }

    pub async fn execute(&self) -> Result<ListResponse, ListError> {
        let blobs = self.blob_store.list().await?;
        let files: Vec<FileDto> = blobs.into_iter().map(FileDto::from).collect();
        Ok(ListResponse::new(files))
    }
}
