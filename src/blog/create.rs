//! Endpoint for creating a blog.

use axum::{
    Json,
    extract::{
        Query,
        State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Response,
};

use crate::{
    Error,
    blog::{BlogEndpointState, BlogForm, BlogOwnerQuery, NewBlog, create_blog},
    category::get_category,
    db::lock_connection,
    response::respond,
    user::get_user,
    validation::{non_empty, parse_body, parse_id, parse_query},
};

/// Create a blog written by `userId` under `categoryId`.
///
/// The user and category must both exist before the title and description are
/// looked at.
pub async fn create_blog_endpoint(
    State(state): State<BlogEndpointState>,
    query: Result<Query<BlogOwnerQuery>, QueryRejection>,
    body: Result<Json<BlogForm>, JsonRejection>,
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

    let form = parse_body(body)?;
    let (Some(title), Some(description)) = (
        non_empty(form.title.as_deref()),
        non_empty(form.description.as_deref()),
    ) else {
        return Err(Error::Validation(
            "Title and description are required".to_owned(),
        ));
    };

    let blog = create_blog(
        NewBlog {
            title: title.to_owned(),
            description: description.to_owned(),
            user_id,
            category_id,
        },
        &connection,
    )?;

    tracing::info!("Created blog {} for user {user_id}", blog.id);

    Ok(respond(StatusCode::CREATED, "Blog created successfully.", blog))
}
