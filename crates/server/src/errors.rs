use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match &e {
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg.clone())),
            ServiceError::DuplicateResource(msg) => JsonApiError::new(StatusCode::CONFLICT, "Conflict", Some(msg.clone())),
            ServiceError::Validation(msg) => JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg.clone())),
            ServiceError::Db(_) => {
                error!(err = %e, code = e.code(), "customer store failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Error", None)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_http_statuses() {
        let cases = [
            (ServiceError::customer_not_found(1), StatusCode::NOT_FOUND),
            (ServiceError::email_taken(), StatusCode::CONFLICT),
            (ServiceError::Validation("no changes found".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Db("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn db_errors_do_not_leak_details() {
        let e = JsonApiError::from(ServiceError::Db("password authentication failed".into()));
        assert!(e.message.is_none());
    }
}
