use sha2::{Digest, Sha256};

use crate::domain::value_objects::ContentHash;

/// Chunk size fed to the hasher (256KB)
const CHUNK_SIZE: usize = 256 * 1024;

/// Utility for computing SHA-256 content hashes.
///
/// The full 32-byte digest is always computed; callers truncate it only when
/// deriving a storage key (see [`ContentHash::key_segment`]).
///
/// Hashing borrows the payload, so the same buffer is uploaded afterwards
/// from its start.
pub struct ContentHasher;

impl ContentHasher {
    /// Compute the SHA-256 hash of an in-memory payload
    pub fn hash_bytes(data: &[u8]) -> ContentHash {
        let mut hasher = Sha256::new();
        for chunk in data.chunks(CHUNK_SIZE) {
            hasher.update(chunk);
        }
        ContentHash::from_digest(&hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        let hash = ContentHasher::hash_bytes(b"abc");
        assert_eq!(
            hash.as_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(hash.key_segment(), "ba7816bf8f01cfea");
    }

    #[test]
    fn test_empty_payload() {
        let hash = ContentHasher::hash_bytes(b"");
        assert_eq!(
            hash.as_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_chunking_matches_single_pass() {
        let data: Vec<u8> = (0..(CHUNK_SIZE * 3 + 17)).map(|i| (i % 251) as u8).collect();
        let expected = hex::encode(Sha256::digest(&data));
        assert_eq!(ContentHasher::hash_bytes(&data).as_hex(), expected);
    }

    #[test]
    fn test_payload_is_untouched() {
        let payload = bytes::Bytes::from_static(b"same bytes");
        let first = ContentHasher::hash_bytes(&payload);
        let second = ContentHasher::hash_bytes(&payload);
        assert_eq!(first, second);
        assert_eq!(&payload[..], b"same bytes");
    }
}
