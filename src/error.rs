use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::store::StoreError;

pub const FORBIDDEN_MESSAGE: &str = "Forbidden: Ungültiger oder fehlender Token";
pub const NOT_FOUND_MESSAGE: &str = "Eintrag nicht gefunden";
pub const READ_FAILED_MESSAGE: &str = "Fehler beim Lesen der Datei";
pub const WRITE_FAILED_MESSAGE: &str = "Fehler beim Schreiben der Datei";
pub const INVALID_TARGET_MESSAGE: &str = "Ungültige Ziel-URL";

/// Custom error type for API endpoints
///
/// Every failure is terminal for the request and is reported as a
/// plain-text body with the matching status code.
#[derive(Debug)]
pub enum ApiError {
    /// Bearer token missing or not equal to the configured token
    Forbidden,
    /// No entry with the requested slug
    EntryNotFound(String),
    /// Store file could not be read, parsed, or written
    Storage(StoreError),
    /// Entry for this slug has no url that can be sent as a Location header
    InvalidTarget(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Forbidden => (StatusCode::FORBIDDEN, FORBIDDEN_MESSAGE),
            ApiError::EntryNotFound(slug) => {
                tracing::info!("Entry not found: {}", slug);
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
            }
            ApiError::Storage(err) if err.is_write() => {
                tracing::error!(error = %err, "storage write failed");
                (StatusCode::INTERNAL_SERVER_ERROR, WRITE_FAILED_MESSAGE)
            }
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage read failed");
                (StatusCode::INTERNAL_SERVER_ERROR, READ_FAILED_MESSAGE)
            }
            ApiError::InvalidTarget(slug) => {
                tracing::error!("Entry {} has no usable redirect target", slug);
                (StatusCode::INTERNAL_SERVER_ERROR, INVALID_TARGET_MESSAGE)
            }
        };

        (status, message).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Storage(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (ApiError::Forbidden, StatusCode::FORBIDDEN, FORBIDDEN_MESSAGE),
            (
                ApiError::EntryNotFound("x".to_string()),
                StatusCode::NOT_FOUND,
                NOT_FOUND_MESSAGE,
            ),
            (
                ApiError::Storage(StoreError::Read(std::io::Error::other("boom"))),
                StatusCode::INTERNAL_SERVER_ERROR,
                READ_FAILED_MESSAGE,
            ),
            (
                ApiError::Storage(StoreError::Write(std::io::Error::other("boom"))),
                StatusCode::INTERNAL_SERVER_ERROR,
                WRITE_FAILED_MESSAGE,
            ),
            (
                ApiError::InvalidTarget("old".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                INVALID_TARGET_MESSAGE,
            ),
        ];

        for (error, status, message) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), status);
            assert_eq!(body_text(response).await, message);
        }
    }
}
