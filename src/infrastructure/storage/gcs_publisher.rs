use std::time::Duration;

use object_store::gcp::GcpCredentialProvider;
use reqwest::StatusCode;
use tracing::debug;

use crate::application::ports::StorageError;
use crate::domain::value_objects::StorageKey;

/// GCS JSON API root
const GCS_JSON_API: &str = "https://storage.googleapis.com/storage/v1";

/// How a freshly written blob is made publicly readable
pub enum BlobPublisher {
    /// Blobs are readable as soon as they exist (in-memory store, or a
    /// bucket that is already public)
    Noop,
    /// Grant `allUsers` read on the object ACL
    GcsAcl(GcsAclPublisher),
}

impl BlobPublisher {
    pub async fn publish(&self, key: &StorageKey) -> Result<(), StorageError> {
        match self {
            BlobPublisher::Noop => Ok(()),
            BlobPublisher::GcsAcl(publisher) => publisher.publish(key).await,
        }
    }
}

/// Applies the `publicRead` predefined ACL through the GCS JSON API.
///
/// `object_store` has no ACL support, so this talks to the API directly,
/// authorised with the bearer token of the same service account the
/// `object_store` client uses.
pub struct GcsAclPublisher {
    http: reqwest::Client,
    credentials: GcpCredentialProvider,
    bucket: String,
    api_base: String,
}

impl GcsAclPublisher {
    pub fn new(
        credentials: GcpCredentialProvider,
        bucket: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StorageError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorageError::Backend(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            credentials,
            bucket: bucket.into(),
            api_base: GCS_JSON_API.to_string(),
        })
    }

    fn object_url(&self, key: &StorageKey) -> String {
        format!(
            "{}/b/{}/o/{}",
            self.api_base,
            urlencoding::encode(&self.bucket),
            urlencoding::encode(key.as_str())
        )
    }

    #[tracing::instrument(skip(self), fields(gcs.bucket = %self.bucket, gcs.key = %key))]
    pub async fn publish(&self, key: &StorageKey) -> Result<(), StorageError> {
        let credential = self
            .credentials
            .get_credential()
            .await
            .map_err(|e| StorageError::PermissionDenied(e.to_string()))?;

        let response = self
            .http
            .patch(self.object_url(key))
            .query(&[("predefinedAcl", "publicRead")])
            .bearer_auth(&credential.bearer)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StorageError::Timeout(e.to_string())
                } else {
                    StorageError::Backend(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            debug!("Object ACL set to publicRead");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => StorageError::NotFound(key.to_string()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                StorageError::PermissionDenied(format!("publish {}: {}", key, body))
            }
            _ => StorageError::Backend(format!("publish {} failed ({}): {}", key, status, body)),
        })
    }
}
