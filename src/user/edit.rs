//! Endpoint for renaming a user.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    Error,
    db::lock_connection,
    response::respond,
    user::{UpdateUserForm, UserEndpointState, Username, update_username},
    validation::{non_empty, parse_body, parse_id, present},
};

/// Change the username of the user named by `userId` in the body.
pub async fn update_user_endpoint(
    State(state): State<UserEndpointState>,
    body: Result<Json<UpdateUserForm>, JsonRejection>,
) -> Result<Response, Error> {
    let form = parse_body(body)?;

    let (Some(raw_user_id), Some(raw_username)) = (
        present(form.user_id.as_deref()),
        non_empty(form.username.as_deref()),
    ) else {
        return Err(Error::Validation("Missing required fields".to_owned()));
    };

    let user_id = parse_id(Some(raw_user_id), "Invalid user ID")?;
    let username = Username::new(raw_username)?;

    let connection = lock_connection(&state.db_connection)?;
    let user = update_username(user_id, &username, &connection)?
        .ok_or_else(|| Error::NotFound("User not found".to_owned()))?;

    Ok(respond(StatusCode::OK, "User updated successfully", user))
}
