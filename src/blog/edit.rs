//! Endpoint for updating a blog.

use axum::{
    Json,
    extract::{
        Path,
        Query,
        State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::Response,
};

use crate::{
    Error,
    blog::{
        BlogChanges, BlogEndpointState, BlogForm, BlogOwnerQuery, get_blog_for_user, update_blog,
    },
    db::lock_connection,
    response::respond,
    user::get_user,
    validation::{non_empty, parse_body, parse_id, parse_path, parse_query},
};

/// Update the title and/or description of the blog at `/blogs/{blog}`.
///
/// Only the user that wrote the blog may update it. Fields missing from the
/// body keep their current value.
pub async fn update_blog_endpoint(
    State(state): State<BlogEndpointState>,
    raw_blog_id: Result<Path<String>, PathRejection>,
    query: Result<Query<BlogOwnerQuery>, QueryRejection>,
    body: Result<Json<BlogForm>, JsonRejection>,
) -> Result<Response, Error> {
    let query = parse_query(query)?;
    let raw_blog_id = parse_path(raw_blog_id)?;
    let user_id = parse_id(query.user_id.as_deref(), "Invalid user ID")?;
    let blog_id = parse_id(Some(&raw_blog_id), "Invalid blog ID")?;

    let connection = lock_connection(&state.db_connection)?;

    if get_user(user_id, &connection)?.is_none() {
        return Err(Error::NotFound("User not found".to_owned()));
    }

    if get_blog_for_user(blog_id, user_id, &connection)?.is_none() {
        return Err(Error::NotFound("Blog not found for this user.".to_owned()));
    }

    let form = parse_body(body)?;
    let changes = BlogChanges {
        title: supplied_text(form.title.as_deref(), "Title cannot be empty")?,
        description: supplied_text(form.description.as_deref(), "Description cannot be empty")?,
    };

    let blog = update_blog(blog_id, user_id, changes, &connection)?
        .ok_or_else(|| Error::NotFound("Blog not found for this user.".to_owned()))?;

    Ok(respond(StatusCode::OK, "Blog updated successfully.", blog))
}

/// Absent text means "leave unchanged", but present text must not be blank.
fn supplied_text(text: Option<&str>, message: &str) -> Result<Option<String>, Error> {
    match text {
        None => Ok(None),
        Some(text) => non_empty(Some(text))
            .map(|text| Some(text.to_owned()))
            .ok_or_else(|| Error::Validation(message.to_owned())),
    }
}
