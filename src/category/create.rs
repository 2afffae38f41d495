//! Endpoint for creating a category.

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
    category::{CategoryEndpointState, CategoryForm, CategoryQuery, CategoryTitle, create_category},
    db::lock_connection,
    response::respond,
    user::get_user,
    validation::{non_empty, parse_body, parse_id, parse_query, present},
};

/// Create a category for the user named in the `userId` query parameter.
pub async fn create_category_endpoint(
    State(state): State<CategoryEndpointState>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
    body: Result<Json<CategoryForm>, JsonRejection>,
) -> Result<Response, Error> {
    let query = parse_query(query)?;
    let form = parse_body(body)?;

    let (Some(raw_user_id), Some(raw_title)) = (
        present(query.user_id.as_deref()),
        non_empty(form.title.as_deref()),
    ) else {
        return Err(Error::Validation(
            "Title and user ID are required".to_owned(),
        ));
    };

    let user_id = parse_id(Some(raw_user_id), "Invalid user ID")?;
    let title = CategoryTitle::new(raw_title)?;

    let connection = lock_connection(&state.db_connection)?;

    if get_user(user_id, &connection)?.is_none() {
        return Err(Error::NotFound("User not found".to_owned()));
    }

    let category = create_category(user_id, title, &connection)?;

    tracing::info!("Created category {} for user {user_id}", category.id);

    Ok(respond(
        StatusCode::CREATED,
        "Category created successfully.",
        category,
    ))
}
