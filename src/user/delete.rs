//! User deletion endpoint.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    Error,
    db::lock_connection,
    response::respond,
    user::{DeleteUserQuery, UserEndpointState, delete_user},
    validation::{parse_id, parse_query},
};

/// Delete the user named by the `userId` query parameter.
///
/// The user's categories and blogs are kept.
pub async fn delete_user_endpoint(
    State(state): State<UserEndpointState>,
    query: Result<Query<DeleteUserQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let query = parse_query(query)?;
    let user_id = parse_id(
        query.user_id.as_deref(),
        "Invalid user ID or userid required",
    )?;

    let connection = lock_connection(&state.db_connection)?;
    let user = delete_user(user_id, &connection)?
        .ok_or_else(|| Error::NotFound("User not found".to_owned()))?;

    tracing::info!("Deleted user {user_id}");

    Ok(respond(StatusCode::OK, "User deleted successfully", user))
}
