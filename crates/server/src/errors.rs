use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// JSON error body: `{"error": ..., "detail"?: ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, error: error.into(), detail }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error, None)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error, None)
    }

    /// Map a service failure. Store faults are logged; their cause reaches the
    /// caller only when `expose_internal` is set.
    pub fn from_service(e: ServiceError, expose_internal: bool) -> Self {
        if !e.is_client_error() {
            error!(error = %e, "request failed");
            let detail = expose_internal.then(|| e.to_string());
            return Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail);
        }
        match e {
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => Self::bad_request(msg),
            other => Self::bad_request(other.to_string()),
        }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        Self::from_service(e, false)
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected request body");
        Self::new(StatusCode::BAD_REQUEST, "Invalid JSON body", Some(rejection.body_text()))
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid query string", Some(rejection.body_text()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid path parameter", Some(rejection.body_text()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_detail_is_hidden_by_default() {
        let hidden = JsonApiError::from_service(ServiceError::Model(ModelError::Db("connection reset".into())), false);
        assert_eq!(hidden.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(hidden.detail, None);
        let body = serde_json::to_value(&hidden).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Internal Server Error"}));

        let shown = JsonApiError::from_service(ServiceError::Internal("connection reset".into()), true);
        assert!(shown.detail.unwrap().contains("connection reset"));
    }

    #[test]
    fn client_errors_keep_their_message() {
        let e = JsonApiError::from_service(ServiceError::Model(ModelError::Validation("All fields are required".into())), false);
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.error, "All fields are required");

        let e = JsonApiError::from_service(ServiceError::NotFound("Module not found".into()), false);
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.error, "Module not found");
    }
}
