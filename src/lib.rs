//! # Upload Relay - Deduplicating Media Upload Service
//!
//! A small HTTP service that accepts image and video uploads, names them by
//! content hash so identical files are stored once, and publishes them to a
//! Google Cloud Storage (Firebase Storage) bucket.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Upload rules, storage keys, content hashes
//! - **Application**: Use cases and the `BlobStore` port
//! - **Infrastructure**: `object_store` adapter, ACL publisher, URL builder
//! - **API**: HTTP handlers, CORS and request logging
//!
//! ## Example Usage
//!
//! ```no_run
//! use upload_relay::{api::create_router, application::builder::ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = Config::from_env();
//! let origins = config.allowed_origins.clone();
//! let state = ApplicationBuilder::new(config).with_storage()?.build()?;
//! let app = create_router(state, &origins);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
