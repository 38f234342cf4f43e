//! Error conversions and framework integration for [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::new(ErrorKind::BadRequest, format!("JSON parse error: {}", err))
                .with_source(err)
        } else {
            AppError::new(ErrorKind::InternalServerError, "JSON serialization error")
                .with_source(err)
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::{StatusCode, header};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "error": self.kind(),
            "message": self.message(),
        });

        // Bearer-token clients expect a challenge on credential failures
        if self.kind() == ErrorKind::Unauthorized {
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], Json(body)).into_response();
        }

        (status, Json(body)).into_response()
    }
}
