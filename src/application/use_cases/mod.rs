mod list_files;
mod upload_file;

pub use list_files::{ListError, ListFilesUseCase};
pub use upload_file::{UploadError, UploadFileUseCase};
