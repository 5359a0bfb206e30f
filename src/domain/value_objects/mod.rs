mod content_hash;
mod naming_mode;
mod storage_key;

pub use content_hash::{ContentHash, KEY_SEGMENT_LEN};
pub use naming_mode::NamingMode;
pub use storage_key::{normalize_folder, sanitize_filename, StorageKey};
