#[cfg(test)]
mod tests {
    use crate::api::handlers::health_handler;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_handler() {
        let (status, body) = health_handler().await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.0.status, "healthy");
        assert_eq!(body.0.message, "API is running");
    }

    #[tokio::test]
    async fn test_health_body_has_exactly_two_fields() {
        let (_, body) = health_handler().await;
        let json = serde_json::to_value(&body.0).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "status": "healthy", "message": "API is running" })
        );
    }
}
