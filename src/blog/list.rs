//! Endpoint for listing and searching blogs.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    Error,
    blog::{BlogEndpointState, BlogFilter, BlogListQuery, query_blogs},
    category::get_category,
    db::lock_connection,
    response::respond,
    user::get_user,
    validation::{parse_id, parse_query},
};

/// Return a page of the blogs a user wrote under a category, oldest first.
///
/// The optional `searchKeyword`, `startDate` and `endDate` query parameters
/// narrow the results, and `page` and `limit` select the page.
pub async fn get_blogs_endpoint(
    State(state): State<BlogEndpointState>,
    query: Result<Query<BlogListQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let query = parse_query(query)?;
    let user_id = parse_id(
        query.user_id.as_deref(),
        "Invalid user ID or userid required",
    )?;
    let category_id = parse_id(
        query.category_id.as_deref(),
        "Invalid category ID or categoryid required",
    )?;

    let connection = lock_connection(&state.db_connection)?;

    if get_user(user_id, &connection)?.is_none() {
        return Err(Error::NotFound("User not found".to_owned()));
    }

    if get_category(category_id, &connection)?.is_none() {
        return Err(Error::NotFound("Category not found".to_owned()));
    }

    let filter = BlogFilter::from_query(user_id, category_id, &query, &state.pagination_config)?;
    let blogs = query_blogs(&filter, &connection)?;

    Ok(respond(StatusCode::OK, "Blogs fetched successfully.", blogs))
}
