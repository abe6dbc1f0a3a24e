//! Per-request correlation id middleware
//!
//! Honors an inbound `x-request-id` header or generates a fresh UUIDv7. The
//! id is bound to a tracing span covering the handler and echoed back on the
//! response so clients can correlate their logs with ours.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use decilog_core_types::RequestId;
use tracing::Instrument;

/// Header carrying the correlation id, inbound and outbound
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn attach_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(|value| RequestId::from_string(value.to_string()))
        .unwrap_or_default();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
