use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{entities::StoredBlob, value_objects::NamingMode};

/// Content type recorded when the client does not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Upload command handed from the HTTP layer to the orchestrator
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub data: Bytes,
    pub filename: String,
    pub content_type: Option<String>,
    pub folder: Option<String>,
    pub naming_mode: NamingMode,
}

impl UploadRequest {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn content_type_or_default(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

/// Whether bytes were transferred for this request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded,
    AlreadyExists,
}

impl UploadOutcome {
    pub fn message(self) -> &'static str {
        match self {
            UploadOutcome::Uploaded => "File uploaded successfully",
            UploadOutcome::AlreadyExists => "File already exists",
        }
    }
}

/// DTO for the uploaded file record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadedFileDto {
    /// Basename of the stored blob, e.g. `ba7816bf8f01cfea.jpg`
    pub filename: String,
    /// Full key inside the bucket
    pub storage_path: String,
    /// Sanitized filename as sent by the client
    pub original_filename: String,
    pub size: u64,
    pub content_type: String,
    /// Public URL of the blob
    pub url: String,
}

impl UploadedFileDto {
    pub fn from_blob(blob: &StoredBlob, original_filename: String, fallback: &UploadRequest) -> Self {
        Self {
            filename: blob.key().file_name().to_string(),
            storage_path: blob.key().to_string(),
            original_filename,
            size: blob.size_bytes(),
            content_type: blob
                .content_type()
                .unwrap_or_else(|| fallback.content_type_or_default())
                .to_string(),
            url: blob.public_url().unwrap_or_default().to_string(),
        }
    }
}

/// DTO for upload responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    /// `File uploaded successfully` or `File already exists`
    pub message: String,
    pub data: UploadedFileDto,
}

impl UploadResponse {
    pub fn new(outcome: UploadOutcome, data: UploadedFileDto) -> Self {
        Self {
            success: true,
            message: outcome.message().to_string(),
            data,
        }
    }
}

/// DTO for one entry of the file listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FileDto {
    pub name: String,
    pub size: u64,
    pub content_type: Option<String>,
    /// RFC 3339 creation timestamp, null when the store has none
    pub created: Option<String>,
    /// RFC 3339 last-update timestamp, null when the store has none
    pub updated: Option<String>,
}

impl From<StoredBlob> for FileDto {
    fn from(blob: StoredBlob) -> Self {
        Self {
            name: blob.key().to_string(),
            size: blob.size_bytes(),
            content_type: blob.content_type().map(|c| c.to_string()),
            created: blob.created_at().map(|t| t.to_rfc3339()),
            updated: blob.updated_at().map(|t| t.to_rfc3339()),
        }
    }
}

/// DTO for list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub files: Vec<FileDto>,
}

impl ListResponse {
    pub fn new(files: Vec<FileDto>) -> Self {
        Self {
            success: true,
            count: files.len(),
            files,
        }
    }
}
