//! JSON body extractor that checks the media type, decodes the body and
//! validates it before the handler runs.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::utils::validation::Validate;

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// A decoded and validated JSON request body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(ApiError::UnsupportedMediaType);
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::from_body_rejection)?;

        let value: T = serde_json::from_slice(&body)?;
        value.validate().map_err(ApiError::Validation)?;

        Ok(Self(value))
    }
}

/// `application/json`, optionally followed by parameters such as `charset`.
pub fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case(JSON_MEDIA_TYPE)
}
