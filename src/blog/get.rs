//! Endpoint for fetching a single blog.

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
    blog::{BlogEndpointState, BlogOwnerQuery, get_blog_for_owner},
    category::get_category,
    db::lock_connection,
    response::respond,
    user::get_user,
    validation::{parse_id, parse_path, parse_query},
};

/// Fetch the blog at `/blogs/{blog}` if it was written by `userId` under `categoryId`.
///
/// A blog that exists under a different user or category is reported as not found.
pub async fn get_blog_endpoint(
    State(state): State<BlogEndpointState>,
    raw_blog_id: Result<Path<String>, PathRejection>,
    query: Result<Query<BlogOwnerQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let query = parse_query(query)?;
    let raw_blog_id = parse_path(raw_blog_id)?;
    let user_id = parse_id(query.user_id.as_deref(), "Invalid user ID")?;
    let category_id = parse_id(query.category_id.as_deref(), "Invalid category ID")?;
    let blog_id = parse_id(Some(&raw_blog_id), "Invalid blog ID")?;

    let connection = lock_connection(&state.db_connection)?;

    if get_user(user_id, &connection)?.is_none() {
        return Err(Error::NotFound("User not found".to_owned()));
    }

    if get_category(category_id, &connection)?.is_none() {
        return Err(Error::NotFound("Category not found".to_owned()));
    }

    let blog = get_blog_for_owner(blog_id, user_id, category_id, &connection)?.ok_or_else(
        || Error::NotFound("Blog not found for this user and category.".to_owned()),
    )?;

    Ok(respond(StatusCode::OK, "Blog fetched successfully.", blog))
}
