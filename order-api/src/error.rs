//! Unified API error type for order-api
//!
//! Bridges db-layer errors (`sqlx::Error`) and request-level failures into
//! HTTP responses. Database errors are logged and masked as a generic 500;
//! everything else passes through with its own status and message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Convenience alias for handler return types
pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid create-order payload (rejected before any side effect)
    #[error("invalid create order request")]
    InvalidRequest,

    /// Lookup by id with no matching row
    #[error("order {0} not found")]
    OrderNotFound(String),

    /// Connection failure or constraint violation on the datastore
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::OrderNotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (self.status_code(), Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::OrderNotFound("abc".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_names_the_order() {
        let err = ApiError::OrderNotFound("o-123".into());
        assert_eq!(err.to_string(), "order o-123 not found");
    }
}
