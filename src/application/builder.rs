use std::sync::Arc;

use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::BlobStore,
    use_cases::{ListFilesUseCase, UploadFileUseCase},
};
use crate::config::{Config, StorageBackend};
use crate::infrastructure::storage::{ObjectStoreBlobStore, PublicUrlBuilder};

/// Error type returned while wiring the application
pub type BuildError = Box<dyn std::error::Error + Send + Sync>;

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    blob_store: Option<Arc<dyn BlobStore>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            blob_store: None,
        }
    }

    /// Initialize the object store client selected by the configuration
    pub fn with_storage(mut self) -> Result<Self, BuildError> {
        let urls = PublicUrlBuilder::new(
            self.config.public_base_url.clone(),
            self.config.bucket_or_default(),
        );

        let blob_store: Arc<dyn BlobStore> = match self.config.storage_backend {
            StorageBackend::Gcs => {
                let bucket = self
                    .config
                    .bucket_name
                    .as_deref()
                    .ok_or("FIREBASE_STORAGE_BUCKET is not set")?;
                info!(
                    bucket = %bucket,
                    credentials = %self.config.credentials_path,
                    timeout_secs = self.config.timeout_secs,
                    "Connecting to Google Cloud Storage"
                );
                Arc::new(ObjectStoreBlobStore::gcs(
                    &self.config.credentials_path,
                    bucket,
                    &self.config.public_base_url,
                    self.config.storage_timeout(),
                )?)
            }
            StorageBackend::Memory => {
                info!("Using in-memory blob store; uploads are not persisted");
                Arc::new(ObjectStoreBlobStore::in_memory(urls))
            }
        };

        self.blob_store = Some(blob_store);
        Ok(self)
    }

    /// Use an externally constructed store (tests, embedding)
    pub fn with_blob_store(mut self, blob_store: Arc<dyn BlobStore>) -> Self {
        self.blob_store = Some(blob_store);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the final application state
    pub fn build(self) -> Result<AppState, BuildError> {
        let blob_store = self.blob_store.ok_or("Blob store not initialized")?;

        let upload_use_case = Arc::new(UploadFileUseCase::new(Arc::clone(&blob_store)));
        let list_use_case = Arc::new(ListFilesUseCase::new(blob_store));

        info!("Application layer initialized");

        Ok(AppState {
            upload_use_case,
            list_use_case,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    fn memory_config() -> Config {
        Config {
            credentials_path: "credential.json".to_string(),
            bucket_name: None,
            host: "127.0.0.1".to_string(),
            port: 5001,
            timeout_secs: 5,
            storage_backend: StorageBackend::Memory,
            public_base_url: "http://localhost:5001".to_string(),
            allowed_origins: vec!["*".to_string()],
            log_format: LogFormat::Pretty,
        }
    }

    #[test]
    fn test_build_without_storage_fails() {
        let result = ApplicationBuilder::new(memory_config()).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_with_memory_backend() {
        let builder = ApplicationBuilder::new(memory_config()).with_storage().unwrap();
        assert_eq!(builder.config().storage_backend, StorageBackend::Memory);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_gcs_backend_requires_bucket() {
        let mut config = memory_config();
        config.storage_backend = StorageBackend::Gcs;
        assert!(ApplicationBuilder::new(config).with_storage().is_err());
    }
}
