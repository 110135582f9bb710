//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use jornada_types::api::ErrorResponse;
use jornada_types::error::ValidationError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Rejected request parameters.
    Validation(String),
    /// Unknown route.
    NotFound,
    /// Anything unexpected. The detail is logged, never returned.
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, ErrorResponse) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("InvalidParameters", msg.clone()),
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "Endpoint not found"),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("InternalServerError", "An unexpected error occurred"),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(detail) = &self {
            tracing::error!(%detail, "request failed");
        }

        let (status, body) = self.parts();
        let body = serde_json::to_string(&body).unwrap_or_else(|_| {
            r#"{"error":"InternalServerError","message":"An unexpected error occurred"}"#
                .to_string()
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_bad_request() {
        let resp = AppError::from(ValidationError::MissingAmount).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "InvalidParameters");
        assert_eq!(
            json["message"],
            "At least one parameter (days or hours) is required"
        );
    }

    #[tokio::test]
    async fn internal_hides_detail() {
        let resp = AppError::Internal("database exploded".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "InternalServerError");
        assert_eq!(json["message"], "An unexpected error occurred");
    }

    #[tokio::test]
    async fn not_found_has_json_content_type() {
        let resp = AppError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
