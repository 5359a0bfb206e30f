use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{field, info, info_span, warn, Instrument, Span};
use uuid::Uuid;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id of the current request, available to handlers as an
/// `Extension<RequestId>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Reuse the caller's id when it is printable, otherwise mint a uuid v4
    fn from_headers(headers: &HeaderMap) -> Self {
        let id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Runs the request inside an `http_request` span so every event logged by
/// the handlers and use cases carries the request id, then records the
/// outcome on that span.
pub async fn request_logging_middleware(mut request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = RequestId::from_headers(request.headers());

    let span = info_span!(
        "http_request",
        request_id = %request_id.as_str(),
        method = %request.method(),
        path = %request.uri().path(),
        status = field::Empty,
        duration_ms = field::Empty,
    );

    request.extensions_mut().insert(request_id.clone());
    let mut response = next.run(request).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    record_outcome(&span, response.status(), start);
    response
}

fn record_outcome(span: &Span, status: StatusCode, start: Instant) {
    let duration_ms = start.elapsed().as_millis() as u64;
    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    let _entered = span.enter();
    if status.is_server_error() {
        warn!("request_completed_with_error");
    } else {
        info!("request_completed");
    }
}
