mod blob;

pub use blob::StoredBlob;
