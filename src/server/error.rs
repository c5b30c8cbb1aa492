use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::utils::error::{FlightError, ResolveError};

/// Everything that can turn a request into an error response.
///
/// Each variant maps to exactly one status code; the body is always
/// `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unexpected http method")]
    MethodNotAllowed,

    #[error("unexpected media type")]
    UnsupportedMediaType,

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("reading request body: {0}")]
    Body(String),

    #[error("json parsing: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("input sanitization: {0}")]
    Validation(FlightError),

    #[error("invalid flight data: {0}")]
    Resolve(#[from] ResolveError),

    #[error("request timed out")]
    Timeout,

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Body(_) | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) | ApiError::Resolve(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn from_body_rejection(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Body(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "rejecting request");
        }

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            ApiError::UnsupportedMediaType.status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ApiError::Resolve(ResolveError::Loop).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        assert_eq!(ApiError::Timeout.status_code(), StatusCode::REQUEST_TIMEOUT);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ApiError::from(json_err).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_messages_wrap_cause() {
        let err = ApiError::Resolve(ResolveError::BrokenPath);
        assert_eq!(err.to_string(), "invalid flight data: broken flight path");

        let err = ApiError::Validation(FlightError::ValidationError {
            message: "at least one flight expected".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "input sanitization: at least one flight expected"
        );
    }

    #[tokio::test]
    async fn test_response_is_json_error_object() {
        let response = ApiError::Resolve(ResolveError::NoSegments).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "invalid flight data: no flights provided"}));
    }
}
