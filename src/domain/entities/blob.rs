use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::StorageKey;

/// Blob entity - a stored object as reported by the bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBlob {
    key: StorageKey,
    size_bytes: u64,
    content_type: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    public_url: Option<String>,
}

impl StoredBlob {
    /// Record for a blob that was just written by this process
    pub fn new(key: StorageKey, size_bytes: u64, content_type: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            key,
            size_bytes,
            content_type: Some(content_type.into()),
            created_at: Some(now),
            updated_at: Some(now),
            public_url: None,
        }
    }

    /// Reconstruct from store metadata
    pub fn reconstruct(
        key: StorageKey,
        size_bytes: u64,
        content_type: Option<String>,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            key,
            size_bytes,
            content_type,
            created_at,
            updated_at,
            public_url: None,
        }
    }

    /// Attach the durable public URL obtained after publishing
    pub fn mark_published(&mut self, url: impl Into<String>) {
        self.public_url = Some(url.into());
    }

    // Getters
    pub fn key(&self) -> &StorageKey {
        &self.key
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_blob_is_unpublished_with_timestamps() {
        let blob = StoredBlob::new(StorageKey::new(None, "a.jpg"), 3, "image/jpeg");
        assert_eq!(blob.public_url(), None);
        assert_eq!(blob.content_type(), Some("image/jpeg"));
        assert!(blob.created_at().is_some());
        assert_eq!(blob.created_at(), blob.updated_at());
    }

    #[test]
    fn test_mark_published() {
        let mut blob = StoredBlob::reconstruct(
            StorageKey::new(Some("trips"), "a.jpg"),
            3,
            None,
            None,
            None,
        );
        blob.mark_published("https://storage.googleapis.com/b/trips/a.jpg");
        assert_eq!(
            blob.public_url(),
            Some("https://storage.googleapis.com/b/trips/a.jpg")
        );
    }
}
