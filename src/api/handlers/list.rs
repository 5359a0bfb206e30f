use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::ListResponse;
use crate::application::use_cases::ListFilesUseCase;

/// GET /files
/// List every stored file. Unpaginated: the whole bucket in one response.
#[utoipa::path(
    get,
    path = "/files",
    tag = "files",
    responses(
        (status = 200, description = "Files retrieved successfully", body = ListResponse),
        (status = 500, description = "Object store failure")
    )
)]
pub async fn list_handler(
    State(use_case): State<Arc<ListFilesUseCase>>,
) -> Result<Json<ListResponse>, ApiError> {
    let response = use_case.execute().await?;

    Ok(Json(response))
}
