//! Defines the app level error type and its conversion to JSON responses.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;

/// The message used when a unique index on the user collection rejects a write.
pub const DUPLICATE_USER_MESSAGE: &str = "Email or username already exists";

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client sent missing or malformed input, e.g. an ID that is not a
    /// valid database ID or an empty required field.
    #[error("{0}")]
    Validation(String),

    /// The request would create a second record with a value that must be
    /// unique, e.g. a username or email that is already taken.
    #[error("{0}")]
    Conflict(String),

    /// The requested resource was not found.
    ///
    /// This is also returned when the resource exists but is not owned by the
    /// user named in the request.
    #[error("{0}")]
    NotFound(String),

    /// An unexpected error occurred with the underlying hashing library.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl Error {
    /// The HTTP status code that the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::Conflict(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::HashingError(_) | Error::DatabaseLockError | Error::SqlError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067
                    && (desc.contains("user.username") || desc.contains("user.email")) =>
            {
                Error::Conflict(DUPLICATE_USER_MESSAGE.to_owned())
            }
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        (status, ApiResponse::<()>::failure(self.to_string())).into_response()
    }
}
