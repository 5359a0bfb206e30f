use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::Json,
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::errors::ApiError;
use crate::application::dto::{UploadRequest, UploadResponse};
use crate::application::use_cases::UploadFileUseCase;
use crate::domain::errors::DomainError;
use crate::domain::validation::MAX_FILE_SIZE;
use crate::domain::value_objects::NamingMode;

/// Request body ceiling for `POST /upload`: the file ceiling plus room for
/// multipart framing and the text fields
pub const MAX_UPLOAD_BODY_BYTES: usize = MAX_FILE_SIZE as usize + 1024 * 1024;

/// Multipart form accepted by `POST /upload` (OpenAPI schema only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// jpg, jpeg or mp4 file, at most 100 MiB
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
    /// Folder prefix inside the bucket, e.g. `trips/2024`
    folder: Option<String>,
    /// `true` stores the file under its sanitized original name and
    /// overwrites any previous blob; default is content-hash naming
    use_original_name: Option<bool>,
}

struct FilePart {
    filename: String,
    content_type: Option<String>,
    data: Bytes,
}

#[derive(Default)]
struct ParsedUploadForm {
    file: Option<FilePart>,
    folder: Option<String>,
    naming_mode: NamingMode,
}

impl ParsedUploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("file") if form.file.is_none() => {
                    form.file = read_file_part(field).await?;
                }
                Some("folder") => {
                    let folder = field.text().await.map_err(multipart_error)?;
                    form.folder = Some(folder).filter(|f| !f.trim().is_empty());
                }
                Some("use_original_name") => {
                    let value = field.text().await.map_err(multipart_error)?;
                    form.naming_mode = NamingMode::from_form_value(&value);
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

/// A `file` part without a filename is a plain form value, not an upload
async fn read_file_part(field: Field<'_>) -> Result<Option<FilePart>, ApiError> {
    let Some(filename) = field.file_name().map(str::to_owned) else {
        return Ok(None);
    };
    let content_type = field.content_type().map(str::to_owned);
    let data = field.bytes().await.map_err(multipart_error)?;

    Ok(Some(FilePart {
        filename,
        content_type,
        data,
    }))
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::bad_request(
            DomainError::FileTooLarge {
                size: MAX_UPLOAD_BODY_BYTES as u64,
                max: MAX_FILE_SIZE,
            }
            .to_string(),
        )
    } else {
        ApiError::bad_request(err.body_text())
    }
}

/// POST /upload
/// Upload an image or video and publish it
#[utoipa::path(
    post,
    path = "/upload",
    tag = "files",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded, or identical content already stored", body = UploadResponse),
        (status = 400, description = "Missing file, empty filename, disallowed type or oversized payload"),
        (status = 500, description = "Object store failure")
    )
)]
pub async fn upload_handler(
    State(use_case): State<Arc<UploadFileUseCase>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let multipart = multipart.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Upload without multipart body");
        ApiError::bad_request("No file provided")
    })?;

    let form = ParsedUploadForm::read(multipart).await?;
    let file = form
        .file
        .ok_or_else(|| ApiError::bad_request("No file provided"))?;

    let request = UploadRequest {
        data: file.data,
        filename: file.filename,
        content_type: file.content_type,
        folder: form.folder,
        naming_mode: form.naming_mode,
    };

    let response = use_case.execute(request).await?;

    Ok(Json(response))
}
