pub mod health;
pub mod list;
pub mod upload;

#[cfg(test)]
mod tests;

pub use health::health_handler;
pub use list::list_handler;
pub use upload::{upload_handler, MAX_UPLOAD_BODY_BYTES};
