use crate::domain::value_objects::StorageKey;

/// Utility for generating public blob URLs:
/// `{base_url}/{bucket}/{percent-encoded key}`
#[derive(Debug, Clone)]
pub struct PublicUrlBuilder {
    base_url: String,
    bucket: String,
}

impl PublicUrlBuilder {
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
        }
    }

    /// Public URL for `key`. Slashes between segments are kept.
    pub fn url(&self, key: &StorageKey) -> String {
        let encoded_key = key
            .as_str()
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        format!("{}/{}/{}", self.base_url, self.bucket, encoded_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_nested_key() {
        let builder = PublicUrlBuilder::new("https://storage.googleapis.com/", "my-bucket");
        let key = StorageKey::new(Some("trips/2024"), "ba7816bf8f01cfea.jpg");
        assert_eq!(
            builder.url(&key),
            "https://storage.googleapis.com/my-bucket/trips/2024/ba7816bf8f01cfea.jpg"
        );
    }

    #[test]
    fn test_url_encodes_segments() {
        let builder = PublicUrlBuilder::new("http://localhost:5001", "local");
        let key = StorageKey::from_stored("my folder/a+b.jpg");
        assert_eq!(
            builder.url(&key),
            "http://localhost:5001/local/my%20folder/a%2Bb.jpg"
        );
    }
}
