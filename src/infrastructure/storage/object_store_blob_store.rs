use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures_util::{stream, StreamExt, TryStreamExt};
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{
    Attribute, Attributes, ClientOptions, GetOptions, ObjectMeta, ObjectStore, PutOptions,
    PutPayload,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::application::ports::{BlobStore, StorageError};
use crate::domain::entities::StoredBlob;
use crate::domain::value_objects::StorageKey;
use crate::infrastructure::storage::{BlobPublisher, GcsAclPublisher, PublicUrlBuilder};

/// Custom metadata attribute carrying the creation timestamp (RFC 3339)
const CREATED_AT_ATTRIBUTE: &str = "created-at";

/// Number of metadata lookups kept in flight while listing
const LIST_HEAD_CONCURRENCY: usize = 8;

impl From<object_store::Error> for StorageError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { path, .. } => StorageError::NotFound(path),
            object_store::Error::PermissionDenied { path, source } => {
                StorageError::PermissionDenied(format!("{}: {}", path, source))
            }
            object_store::Error::Unauthenticated { path, source } => {
                StorageError::PermissionDenied(format!("{}: {}", path, source))
            }
            other => StorageError::Backend(other.to_string()),
        }
    }
}

/// Blob store backed by any `object_store` implementation (GCS in
/// production, in-memory for local runs and tests)
pub struct ObjectStoreBlobStore {
    store: Arc<dyn ObjectStore>,
    urls: PublicUrlBuilder,
    publisher: BlobPublisher,
}

impl ObjectStoreBlobStore {
    pub fn new(store: Arc<dyn ObjectStore>, urls: PublicUrlBuilder, publisher: BlobPublisher) -> Self {
        Self {
            store,
            urls,
            publisher,
        }
    }

    /// Process-local store; every blob is public as soon as it is written
    pub fn in_memory(urls: PublicUrlBuilder) -> Self {
        Self::new(Arc::new(InMemory::new()), urls, BlobPublisher::Noop)
    }

    /// Google Cloud Storage bucket authenticated with a service account file.
    ///
    /// `timeout` bounds every individual request made to the bucket.
    pub fn gcs(
        credentials_path: &str,
        bucket: &str,
        public_base_url: &str,
        timeout: Duration,
    ) -> Result<Self, StorageError> {
        let client_options = ClientOptions::new()
            .with_timeout(timeout)
            .with_connect_timeout(timeout);

        let gcs = GoogleCloudStorageBuilder::new()
            .with_service_account_path(credentials_path)
            .with_bucket_name(bucket)
            .with_client_options(client_options)
            .build()?;

        let publisher = GcsAclPublisher::new(Arc::clone(gcs.credentials()), bucket, timeout)?;

        Ok(Self::new(
            Arc::new(gcs),
            PublicUrlBuilder::new(public_base_url, bucket),
            BlobPublisher::GcsAcl(publisher),
        ))
    }

    fn location(key: &StorageKey) -> Path {
        Path::from(key.as_str())
    }

    async fn head(&self, key: &StorageKey) -> Result<StoredBlob, object_store::Error> {
        let options = GetOptions {
            head: true,
            ..Default::default()
        };
        let result = self.store.get_opts(&Self::location(key), options).await?;
        Ok(describe(key.clone(), &result.meta, Some(&result.attributes)))
    }

    /// Listing only yields size and mtime; attributes need a metadata lookup
    async fn describe_listed(&self, meta: ObjectMeta) -> Result<StoredBlob, StorageError> {
        let key = StorageKey::from_stored(meta.location.to_string());
        match self.head(&key).await {
            Ok(blob) => Ok(blob),
            Err(object_store::Error::NotFound { .. }) => {
                // Removed out of band between list and head
                debug!(key = %key, "Listed blob vanished before metadata lookup");
                Ok(describe(key, &meta, None))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn attribute_value(attributes: &Attributes, attribute: &Attribute) -> Option<String> {
    attributes.get(attribute).map(|value| {
        let value: &str = value.as_ref();
        value.to_string()
    })
}

fn describe(key: StorageKey, meta: &ObjectMeta, attributes: Option<&Attributes>) -> StoredBlob {
    let content_type =
        attributes.and_then(|attrs| attribute_value(attrs, &Attribute::ContentType));

    let created_at = attributes
        .and_then(|attrs| attribute_value(attrs, &Attribute::Metadata(CREATED_AT_ATTRIBUTE.into())))
        .and_then(|raw| match DateTime::parse_from_rfc3339(&raw) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(e) => {
                warn!(key = %key, error = %e, "Ignoring malformed created-at attribute");
                None
            }
        });

    StoredBlob::reconstruct(
        key,
        meta.size,
        content_type,
        created_at,
        Some(meta.last_modified),
    )
}

#[async_trait]
impl BlobStore for ObjectStoreBlobStore {
    #[tracing::instrument(skip(self, data), fields(key = %key, size = data.len()))]
    async fn put(
        &self,
        key: &StorageKey,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let start = std::time::Instant::now();

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        attributes.insert(
            Attribute::Metadata(CREATED_AT_ATTRIBUTE.into()),
            Utc::now().to_rfc3339().into(),
        );
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        let result = self
            .store
            .put_opts(&Self::location(key), PutPayload::from(data), options)
            .await;

        let duration_ms = start.elapsed().as_millis();
        match result {
            Ok(_) => {
                debug!(duration_ms, "Blob written");
                Ok(())
            }
            Err(e) => {
                warn!(duration_ms, error = %e, "Blob write failed");
                Err(e.into())
            }
        }
    }

    async fn exists(&self, key: &StorageKey) -> Result<bool, StorageError> {
        match self.head(key).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn reload(&self, key: &StorageKey) -> Result<StoredBlob, StorageError> {
        Ok(self.head(key).await?)
    }

    async fn publish(&self, key: &StorageKey) -> Result<(), StorageError> {
        self.publisher.publish(key).await
    }

    fn public_url(&self, key: &StorageKey) -> String {
        self.urls.url(key)
    }

    async fn list(&self) -> Result<Vec<StoredBlob>, StorageError> {
        let metas: Vec<ObjectMeta> = self.store.list(None).try_collect().await?;

        stream::iter(metas)
            .map(|meta| self.describe_listed(meta))
            .buffered(LIST_HEAD_CONCURRENCY)
            .try_collect()
            .await
    }
}
