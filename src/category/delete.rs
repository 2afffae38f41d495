//! Endpoint for deleting a category.

use axum::{
    extract::{
        Path,
        Query,
        State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::Response,
};

use crate::{
    Error,
    category::{CategoryEndpointState, CategoryQuery, delete_category},
    db::lock_connection,
    response::respond,
    user::get_user,
    validation::{parse_id, parse_path, parse_query},
};

/// Delete the category at `/categories/{category}` if it belongs to `userId`.
///
/// Blogs filed under the category are kept.
pub async fn delete_category_endpoint(
    State(state): State<CategoryEndpointState>,
    raw_category_id: Result<Path<String>, PathRejection>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let query = parse_query(query)?;
    let raw_category_id = parse_path(raw_category_id)?;
    let user_id = parse_id(query.user_id.as_deref(), "Invalid user ID.")?;
    let category_id = parse_id(Some(&raw_category_id), "Invalid category ID.")?;

    let connection = lock_connection(&state.db_connection)?;

    if get_user(user_id, &connection)?.is_none() {
        return Err(Error::NotFound("User not found.".to_owned()));
    }

    let category = delete_category(category_id, user_id, &connection)?
        .ok_or_else(|| Error::NotFound("Category not found for this user.".to_owned()))?;

    tracing::info!("Deleted category {category_id} of user {user_id}");

    Ok(respond(
        StatusCode::OK,
        "Category deleted successfully.",
        category,
    ))
}
