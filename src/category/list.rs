//! Endpoint for listing a user's categories.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    Error,
    category::{CategoryEndpointState, CategoryQuery, get_categories_for_user},
    db::lock_connection,
    response::respond,
    user::get_user,
    validation::{parse_id, parse_query},
};

/// Return every category owned by the user named in the `userId` query parameter.
pub async fn get_categories_endpoint(
    State(state): State<CategoryEndpointState>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let query = parse_query(query)?;
    let user_id = parse_id(query.user_id.as_deref(), "Invalid user ID")?;

    let connection = lock_connection(&state.db_connection)?;

    if get_user(user_id, &connection)?.is_none() {
        return Err(Error::NotFound("User not found".to_owned()));
    }

    let categories = get_categories_for_user(user_id, &connection)?;

    Ok(respond(
        StatusCode::OK,
        "Categories fetched successfully.",
        categories,
    ))
}
