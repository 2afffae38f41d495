//! Endpoint for renaming a category.

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
    category::{
        CategoryEndpointState, CategoryForm, CategoryQuery, CategoryTitle, update_category_title,
    },
    db::lock_connection,
    response::respond,
    user::get_user,
    validation::{parse_body, parse_id, parse_path, parse_query},
};

/// Rename the category at `/categories/{category}` if it belongs to `userId`.
///
/// A category owned by someone else is reported as not found.
pub async fn update_category_endpoint(
    State(state): State<CategoryEndpointState>,
    raw_category_id: Result<Path<String>, PathRejection>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
    body: Result<Json<CategoryForm>, JsonRejection>,
) -> Result<Response, Error> {
    let query = parse_query(query)?;
    let raw_category_id = parse_path(raw_category_id)?;
    let category_id = parse_id(Some(&raw_category_id), "Invalid category ID.")?;
    let user_id = parse_id(query.user_id.as_deref(), "Invalid user ID.")?;
    let form = parse_body(body)?;
    let title = CategoryTitle::new(form.title.as_deref().unwrap_or_default())?;

    let connection = lock_connection(&state.db_connection)?;

    if get_user(user_id, &connection)?.is_none() {
        return Err(Error::NotFound("User not found.".to_owned()));
    }

    let category = update_category_title(category_id, user_id, &title, &connection)?
        .ok_or_else(|| Error::NotFound("Category not found for this user.".to_owned()))?;

    Ok(respond(
        StatusCode::OK,
        "Category updated successfully.",
        category,
    ))
}

#[cfg(test)]
mod update_category_endpoint_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        category::{Category, get_category},
        database_id::DatabaseId,
        endpoints::{self, format_endpoint},
        response::ApiResponse,
        test_utils::{
            assert_failure, get_test_server, get_test_state, insert_test_category,
            insert_test_user,
        },
    };

    #[tokio::test]
    async fn rename_succeeds() {
        let state = get_test_state();
        let user = insert_test_user(&state, "al");
        let category = insert_test_category(&state, user.id, "Tech");
        let server = get_test_server(&state);

        let response = server
            .patch(&format_endpoint(endpoints::CATEGORY, category.id))
            .add_query_param("userId", user.id)
            .json(&json!({"title": "Science"}))
            .await;

        response.assert_status_ok();
        let body = response.json::<ApiResponse<Category>>();
        assert_eq!(body.message, "Category updated successfully.");
        let updated = body.data.expect("want updated category");
        assert_eq!(updated.id, category.id);
        assert_eq!(updated.title.as_ref(), "Science");
        assert_eq!(updated.created_at, category.created_at);
        assert!(updated.updated_at >= category.updated_at);
    }

    #[tokio::test]
    async fn category_of_other_user_is_not_found_and_unchanged() {
        let state = get_test_state();
        let al = insert_test_user(&state, "al");
        let bo = insert_test_user(&state, "bo");
        let category = insert_test_category(&state, al.id, "Tech");
        let server = get_test_server(&state);

        let response = server
            .patch(&format_endpoint(endpoints::CATEGORY, category.id))
            .add_query_param("userId", bo.id)
            .json(&json!({"title": "Hijacked"}))
            .await;

        assert_failure(&response, StatusCode::NOT_FOUND, "Category not found for this user.");
        assert_eq!(
            get_category(category.id, &state.db_connection.lock().unwrap()),
            Ok(Some(category))
        );
    }

    #[tokio::test]
    async fn validation_runs_in_order() {
        let state = get_test_state();
        let user = insert_test_user(&state, "al");
        let category = insert_test_category(&state, user.id, "Tech");
        let server = get_test_server(&state);

        let bad_category = server
            .patch(&format_endpoint(endpoints::CATEGORY, "nope"))
            .add_query_param("userId", "nope")
            .json(&json!({}))
            .await;
        let bad_user = server
            .patch(&format_endpoint(endpoints::CATEGORY, category.id))
            .add_query_param("userId", "nope")
            .json(&json!({}))
            .await;
        let no_title = server
            .patch(&format_endpoint(endpoints::CATEGORY, category.id))
            .add_query_param("userId", DatabaseId::generate())
            .json(&json!({"title": ""}))
            .await;

        assert_failure(&bad_category, StatusCode::BAD_REQUEST, "Invalid category ID.");
        assert_failure(&bad_user, StatusCode::BAD_REQUEST, "Invalid user ID.");
        assert_failure(&no_title, StatusCode::BAD_REQUEST, "Title is required.");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let state = get_test_state();
        let user = insert_test_user(&state, "al");
        let category = insert_test_category(&state, user.id, "Tech");
        let server = get_test_server(&state);

        let response = server
            .patch(&format_endpoint(endpoints::CATEGORY, category.id))
            .add_query_param("userId", DatabaseId::generate())
            .json(&json!({"title": "Science"}))
            .await;

        assert_failure(&response, StatusCode::NOT_FOUND, "User not found.");
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let state = get_test_state();
        let user = insert_test_user(&state, "al");
        let server = get_test_server(&state);

        let response = server
            .patch(&format_endpoint(endpoints::CATEGORY, DatabaseId::generate()))
            .add_query_param("userId", user.id)
            .json(&json!({"title": "Science"}))
            .await;

        assert_failure(&response, StatusCode::NOT_FOUND, "Category not found for this user.");
    }
}
