use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::HealthResponse;
use crate::api::handlers::upload::UploadForm;
use crate::application::dto::{FileDto, ListResponse, UploadResponse, UploadedFileDto};

/// OpenAPI document for the upload relay
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Upload Relay API",
        version = "1.0.0",
        description = "Accepts image and video uploads, deduplicates them by content and publishes them to cloud object storage"
    ),
    servers(
        (url = "http://localhost:5001", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::upload::upload_handler,
        crate::api::handlers::list::list_handler,
    ),
    components(
        schemas(
            HealthResponse,
            UploadForm,
            UploadResponse,
            UploadedFileDto,
            ListResponse,
            FileDto,
        )
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "files", description = "Upload and listing operations")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
