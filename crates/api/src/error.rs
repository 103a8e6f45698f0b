use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cardrank_core::providers::ProviderError;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// Body could not be decoded into an applicant profile.
    MalformedRequest(String),
    Provider(ProviderError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MalformedRequest(detail) => {
                write!(f, "please enter the body in right JSON format: {detail}")
            }
            ApiError::Provider(err) => write!(f, "unable to retrieve {}", err.provider),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::MalformedRequest(_) => None,
            ApiError::Provider(err) => Some(err),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(value: ProviderError) -> Self {
        Self::Provider(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({ "error": self.to_string() });
        if let ApiError::Provider(err) = &self {
            body["provider"] = json!(err.provider);
            body["kind"] = json!(err.kind.as_str());
        }
        (self.status(), Json(body)).into_response()
    }
}
