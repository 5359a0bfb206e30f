use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Build the CORS layer from configured origins.
///
/// `*`, or a list without a single parseable origin, allows any origin.
pub fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let wildcard = allowed_origins.iter().any(|origin| origin.trim() == "*");

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
        .collect();

    let origins = if wildcard || origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::any())
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(86400)) // 24 hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn allow_origin_header(allowed: &[&str], origin: &str) -> Option<String> {
        let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .layer(create_cors_layer(&allowed));

        let request = Request::builder()
            .uri("/health")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        assert_eq!(
            allow_origin_header(&["*"], "https://anywhere.example").await,
            Some("*".to_string())
        );
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed() {
        assert_eq!(
            allow_origin_header(&["https://app.example.com"], "https://app.example.com").await,
            Some("https://app.example.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_header() {
        assert_eq!(
            allow_origin_header(&["https://app.example.com"], "https://evil.example").await,
            None
        );
    }

    #[tokio::test]
    async fn test_unparseable_origins_fall_back_to_any() {
        assert_eq!(
            allow_origin_header(&["bad\norigin"], "https://x.example").await,
            Some("*".to_string())
        );
    }
}
