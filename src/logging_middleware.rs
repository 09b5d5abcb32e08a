// src/logging_middleware.rs
//! Middleware timing every request, with JSON body logging at debug level

use axum::body::to_bytes;
use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, Level};

const MAX_LOGGED_REQUEST_BYTES: usize = 2 * 1024 * 1024;

/// Logs method, uri, status and elapsed time for every request
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    // Bodies are only buffered when they are going to be logged
    if !tracing::enabled!(Level::DEBUG) {
        let response = next.run(request).await;
        info!(
            method = %method,
            uri = %uri,
            status = %response.status(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request handled"
        );
        return Ok(response);
    }

    let (parts, body) = request.into_parts();
    let bytes = read_request_body(body).await?;
    if let Some(body) = printable_body(&bytes) {
        debug!(method = %method, uri = %uri, request_body = %body, "Request");
    }

    let response = next
        .run(Request::from_parts(parts, Body::from(bytes)))
        .await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    if let Some(body) = printable_body(&bytes) {
        debug!(status = %parts.status, response_body = %body, "Response");
    }

    info!(
        method = %method,
        uri = %uri,
        status = %parts.status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request handled"
    );

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Buffer a request body, refusing anything above axum's default body limit
async fn read_request_body(body: Body) -> Result<Bytes, StatusCode> {
    to_bytes(body, MAX_LOGGED_REQUEST_BYTES)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)
}

/// Pretty JSON when the body parses, raw text otherwise, nothing when empty
/// or not UTF-8
fn printable_body(bytes: &Bytes) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }

    let text = std::str::from_utf8(bytes).ok()?;
    Some(
        serde_json::from_str::<serde_json::Value>(text)
            .ok()
            .and_then(|json| serde_json::to_string_pretty(&json).ok())
            .unwrap_or_else(|| text.to_string()),
    )
}
