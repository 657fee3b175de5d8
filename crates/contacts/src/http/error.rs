//! Error responses for the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contacts_core::ErrorInfo;
use thiserror::Error;

/// Errors an endpoint can answer with.
///
/// Every variant renders as a JSON [`ErrorInfo`] body, whatever format the
/// request negotiated.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The targeted contact does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Body, query or page parameters could not be used.
    #[error("{0}")]
    BadRequest(String),

    /// The request body is neither JSON nor XML.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Store or serializer failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn contact_not_found(id: &str) -> Self {
        Self::NotFound(format!("Contact with ID {id} not found"))
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<contacts_core::Error> for ApiError {
    fn from(err: contacts_core::Error) -> Self {
        use contacts_core::Error;

        match err {
            Error::NotFound(msg) => Self::NotFound(msg),
            Error::ParseError(msg) | Error::InvalidPageRequest(msg) => Self::BadRequest(msg),
            Error::DatabaseError(msg) | Error::SerializationError(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Internal details are logged, never sent.
        let message = match self {
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                "Internal server error".to_string()
            }
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::UnsupportedMediaType(msg) => msg,
        };

        (status, Json(ErrorInfo::new(message))).into_response()
    }
}
