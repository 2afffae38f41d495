//! Endpoint for listing every user.

use axum::{extract::State, http::StatusCode, response::Response};

use crate::{
    Error,
    db::lock_connection,
    response::respond,
    user::{UserEndpointState, get_all_users},
};

/// Return all users in sign-up order. Password hashes are never included.
pub async fn get_users_endpoint(
    State(state): State<UserEndpointState>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let users = get_all_users(&connection)?;

    Ok(respond(StatusCode::OK, "Users fetched successfully.", users))
}
