use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{health_handler, list_handler, upload_handler, MAX_UPLOAD_BODY_BYTES};
use crate::api::middleware::{cors, request_logging};
use crate::api::openapi;
use crate::application::use_cases::{ListFilesUseCase, UploadFileUseCase};

/// Application state container
pub struct AppState {
    pub upload_use_case: Arc<UploadFileUseCase>,
    pub list_use_case: Arc<ListFilesUseCase>,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let upload_state = Arc::clone(&state.upload_use_case);
    let list_state = Arc::clone(&state.list_use_case);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/upload",
            post(upload_handler)
                .with_state(upload_state)
                // Let oversized payloads reach the handler so they get the JSON 400
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES)),
        )
        .route("/files", get(list_handler).with_state(list_state))
        .merge(openapi::swagger_ui())
        .layer(axum_middleware::from_fn(
            request_logging::request_logging_middleware,
        ))
        .layer(cors::create_cors_layer(allowed_origins))
}
