//! Input checks that run before any store lookup.

use std::str::FromStr;

use axum::{
    Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use email_address::EmailAddress;

use crate::{Error, database_id::DatabaseId};

/// Parse a client supplied ID, failing with `message` if it is absent or malformed.
///
/// # Errors
///
/// Returns [Error::Validation] with `message` if `raw_id` is `None` or is not a
/// well-formed [DatabaseId].
pub fn parse_id(raw_id: Option<&str>, message: &str) -> Result<DatabaseId, Error> {
    raw_id
        .and_then(|raw_id| DatabaseId::parse(raw_id).ok())
        .ok_or_else(|| Error::Validation(message.to_owned()))
}

/// Unwrap a JSON request body, turning an unreadable body into a validation error.
///
/// Handlers take the body as a `Result` and call this at the point where the
/// body is first needed, so that earlier checks keep their precedence.
///
/// # Errors
///
/// Returns [Error::Validation] describing why the body could not be read.
pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    body.map(|Json(body)| body).map_err(|rejection| {
        Error::Validation(format!("Invalid request body: {}", rejection.body_text()))
    })
}

/// Unwrap the query string, turning a malformed one into a validation error.
///
/// # Errors
///
/// Returns [Error::Validation] describing why the query string could not be read.
pub fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, Error> {
    query.map(|Query(query)| query).map_err(|rejection| {
        Error::Validation(format!("Invalid query string: {}", rejection.body_text()))
    })
}

/// Unwrap a path parameter, turning an undecodable one into a validation error.
///
/// # Errors
///
/// Returns [Error::Validation] describing why the path could not be read.
pub fn parse_path<T>(path: Result<Path<T>, PathRejection>) -> Result<T, Error> {
    path.map(|Path(path)| path).map_err(|rejection| {
        Error::Validation(format!("Invalid path: {}", rejection.body_text()))
    })
}

/// Return the trimmed text if it contains anything other than whitespace.
pub fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

/// Return the text if it is not empty.
///
/// Unlike [non_empty] the text is not trimmed, so IDs are checked by
/// [parse_id] exactly as the client sent them.
pub fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

/// Parse and validate an email address.
///
/// # Errors
///
/// Returns [Error::Validation] if `raw_email` is not a syntactically valid address.
pub fn parse_email(raw_email: &str) -> Result<EmailAddress, Error> {
    EmailAddress::from_str(raw_email.trim())
        .map_err(|_| Error::Validation("Invalid email address".to_owned()))
}
