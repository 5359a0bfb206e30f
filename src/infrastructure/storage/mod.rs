mod content_hasher;
mod gcs_publisher;
mod object_store_blob_store;
mod url_builder;

pub use content_hasher::ContentHasher;
pub use gcs_publisher::{BlobPublisher, GcsAclPublisher};
pub use object_store_blob_store::ObjectStoreBlobStore;
pub use url_builder::PublicUrlBuilder;
