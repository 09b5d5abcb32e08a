// Error handling types for the API

use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::fmt;
use tracing::error;

use crate::candidats::store::StoreError;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Rejected request, answered with failure alert headers and no body
    InvalidRequest { message: String, headers: HeaderMap },
    StoreError(StoreError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest { message, .. } => write!(f, "Invalid Request: {}", message),
            ApiError::StoreError(e) => write!(f, "Store Error: {}", e),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::StoreError(e)
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code) = match self {
            ApiError::InvalidRequest { headers, .. } => {
                return (StatusCode::BAD_REQUEST, headers).into_response();
            }
            ApiError::StoreError(e) => {
                error!(error = %e, "Store error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Store operation failed".to_string(),
                    "STORE_ERROR",
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_invalid_request_has_headers_and_no_body() {
        let mut headers = HeaderMap::new();
        headers.insert("x-testifyapp-error", HeaderValue::from_static("error.idexists"));

        let response = ApiError::InvalidRequest {
            message: "A new candidat cannot already have an ID".to_string(),
            headers,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("x-testifyapp-error").unwrap(),
            "error.idexists"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_store_error_maps_to_generic_500() {
        let response = ApiError::from(StoreError::MissingIdentifier).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "STORE_ERROR");
        assert_eq!(json["error"], "Store operation failed");
    }
}
