use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use studio_cms_core::auth::AuthError;
use studio_cms_core::content::ContentError;
use studio_cms_core::media::MediaError;
use studio_cms_core::store::StoreError;

/// API error type, rendered as the JSON error envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage unavailable: {0}")]
    BadGateway(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::UnknownPage(_) | ContentError::UnknownSection { .. } => {
                ApiError::NotFound(err.to_string())
            }
            ContentError::InvalidSection { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::BadGateway(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Unauthorized,
            AuthError::Store(err) => err.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<MediaError> for ApiError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::InvalidPath(_) | MediaError::UnsupportedType(_) | MediaError::Empty => {
                ApiError::BadRequest(err.to_string())
            }
            MediaError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            MediaError::Io(_) => ApiError::BadGateway(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "notFound", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "badRequest", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Invalid email or password".to_string(),
            ),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::BadGateway(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "storageUnavailable",
                    "Storage is unavailable".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": {
                "type": error_type,
                "message": message,
                "statusCode": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
