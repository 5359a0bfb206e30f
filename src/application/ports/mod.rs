mod blob_store;

pub use blob_store::{BlobStore, StorageError};

#[cfg(test)]
pub use blob_store::MockBlobStore;
