//! Error handling for the bookrack HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Application error types that map to HTTP responses.
///
/// Exactly three kinds are classified; everything else is `Internal` and
/// surfaces as a generic server error with the cause logged, never echoed.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<String>),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a malformed-body error carrying the parser message
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody(message.into())
    }

    /// Create a validation error from collected field violations
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }

    /// Create a not found error
    pub fn not_found() -> Self {
        Self::NotFound
    }
}

impl From<bookrack_store::StoreError> for AppError {
    fn from(err: bookrack_store::StoreError) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();

        let (status, body) = match self {
            AppError::MalformedBody(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("invalid request body format : \"{message}\"") }),
            ),
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, json!({ "errors": errors })),
            AppError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "not found" })),
            AppError::Internal(err) => {
                tracing::error!(error_id = %error_id, error = ?err, "unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
        };

        tracing::error!(
            error_id = %error_id,
            status_code = %status.as_u16(),
            "request error"
        );

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_malformed_body_response() {
        let error = AppError::malformed_body("expected value at line 1 column 1");
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": "invalid request body format : \"expected value at line 1 column 1\""
            })
        );
    }

    #[tokio::test]
    async fn test_validation_response_lists_all_violations() {
        let error = AppError::validation(vec![
            "author must be a non-empty string".to_string(),
            "available must be a boolean".to_string(),
        ]);
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = AppError::not_found().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "not found" }));
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let internal_error = anyhow::anyhow!("table connection failed");
        let response = AppError::Internal(internal_error).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "internal server error" })
        );
    }
}
