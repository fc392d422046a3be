//! Core-error to HTTP response mapping.
//!
//! Validation failures never reach this layer in normal operation: the
//! handlers convert them to flash-and-redirect themselves. Everything that
//! does arrive here maps to the response class the error deserves.

use crate::errors::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

/// Newtype so the crate error can implement `IntoResponse`.
#[derive(Debug)]
pub struct WebError(pub Error);

impl From<Error> for WebError {
    fn from(err: Error) -> Self {
        WebError(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::Auth { .. } => Redirect::to("/admin_login").into_response(),
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, "not found").into_response(),
            Error::Validation { message } => (StatusCode::BAD_REQUEST, message).into_response(),
            err => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}

/// Convenience result type for handlers.
pub type WebResult<T> = std::result::Result<T, WebError>;
