use serde::{Deserialize, Serialize};

/// Number of hex characters of the digest used in storage keys
pub const KEY_SEGMENT_LEN: usize = 16;

/// SHA-256 content hash (32 bytes = 64 lowercase hex chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(String);

impl ContentHash {
    /// Wrap a raw SHA-256 digest (32 bytes)
    pub fn from_digest(digest: &[u8]) -> Self {
        debug_assert_eq!(digest.len(), 32, "SHA-256 digests are 32 bytes");
        Self(hex::encode(digest))
    }

    /// Get hex string representation
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Truncated digest used as the basename of deduplicated uploads
    pub fn key_segment(&self) -> &str {
        &self.0[..KEY_SEGMENT_LEN]
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest() -> [u8; 32] {
        let mut bytes = [0xffu8; 32];
        bytes[..8].copy_from_slice(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
        bytes
    }

    #[test]
    fn test_from_digest_is_lowercase_hex() {
        let content_hash = ContentHash::from_digest(&digest());
        assert_eq!(content_hash.as_hex().len(), 64);
        assert_eq!(
            content_hash.as_hex(),
            format!("0123456789abcdef{}", "f".repeat(48))
        );
        assert_eq!(content_hash.to_string(), content_hash.as_hex());
    }

    #[test]
    fn test_key_segment_is_prefix() {
        let content_hash = ContentHash::from_digest(&digest());
        assert_eq!(content_hash.key_segment(), "0123456789abcdef");
        assert_eq!(content_hash.key_segment().len(), KEY_SEGMENT_LEN);
    }
}
