//! Endpoint for deleting a blog.

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
    blog::{BlogEndpointState, BlogOwnerQuery, delete_blog},
    db::lock_connection,
    response::respond,
    user::get_user,
    validation::{parse_id, parse_path, parse_query},
};

/// Delete the blog at `/blogs/{blog}` if it was written by `userId`.
pub async fn delete_blog_endpoint(
    State(state): State<BlogEndpointState>,
    raw_blog_id: Result<Path<String>, PathRejection>,
    query: Result<Query<BlogOwnerQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let query = parse_query(query)?;
    let raw_blog_id = parse_path(raw_blog_id)?;
    let user_id = parse_id(query.user_id.as_deref(), "Invalid user ID")?;
    let blog_id = parse_id(Some(&raw_blog_id), "Invalid blog ID")?;

    let connection = lock_connection(&state.db_connection)?;

    if get_user(user_id, &connection)?.is_none() {
        return Err(Error::NotFound("User not found".to_owned()));
    }

    let blog = delete_blog(blog_id, user_id, &connection)?
        .ok_or_else(|| Error::NotFound("Blog not found for this user.".to_owned()))?;

    tracing::info!("Deleted blog {blog_id} of user {user_id}");

    Ok(respond(StatusCode::OK, "Blog deleted successfully.", blog))
}

#[cfg(test)]
mod delete_blog_endpoint_tests {
    use axum::http::StatusCode;

    use crate::{
        blog::{Blog, get_blog},
        database_id::DatabaseId,
        endpoints::{self, format_endpoint},
        response::ApiResponse,
        test_utils::{
            assert_failure, get_test_server, get_test_state, insert_test_blog,
            insert_test_category, insert_test_user,
        },
    };

    #[tokio::test]
    async fn delete_blog_succeeds() {
        let state = get_test_state();
        let user = insert_test_user(&state, "al");
        let category = insert_test_category(&state, user.id, "Tech");
        let blog = insert_test_blog(&state, user.id, category.id, "T", "D");
        let server = get_test_server(&state);

        let response = server
            .delete(&format_endpoint(endpoints::BLOG, blog.id))
            .add_query_param("userId", user.id)
            .await;

        response.assert_status_ok();
        let body = response.json::<ApiResponse<Blog>>();
        assert_eq!(body.message, "Blog deleted successfully.");
        assert_eq!(body.data, Some(blog.clone()));
        assert_eq!(
            get_blog(blog.id, &state.db_connection.lock().unwrap()),
            Ok(None)
        );
    }

    #[tokio::test]
    async fn blog_of_other_user_is_not_deleted() {
        let state = get_test_state();
        let al = insert_test_user(&state, "al");
        let bo = insert_test_user(&state, "bo");
        let category = insert_test_category(&state, al.id, "Tech");
        let blog = insert_test_blog(&state, al.id, category.id, "T", "D");
        let server = get_test_server(&state);

        let response = server
            .delete(&format_endpoint(endpoints::BLOG, blog.id))
            .add_query_param("userId", bo.id)
            .await;

        assert_failure(&response, StatusCode::NOT_FOUND, "Blog not found for this user.");
        assert_eq!(
            get_blog(blog.id, &state.db_connection.lock().unwrap()),
            Ok(Some(blog))
        );
    }

    #[tokio::test]
    async fn checks_run_in_order() {
        let state = get_test_state();
        let server = get_test_server(&state);

        let bad_user = server
            .delete(&format_endpoint(endpoints::BLOG, "nope"))
            .add_query_param("userId", "nope")
            .await;
        let bad_blog = server
            .delete(&format_endpoint(endpoints::BLOG, "nope"))
            .add_query_param("userId", DatabaseId::generate())
            .await;
        let unknown_user = server
            .delete(&format_endpoint(endpoints::BLOG, DatabaseId::generate()))
            .add_query_param("userId", DatabaseId::generate())
            .await;

        assert_failure(&bad_user, StatusCode::BAD_REQUEST, "Invalid user ID");
        assert_failure(&bad_blog, StatusCode::BAD_REQUEST, "Invalid blog ID");
        assert_failure(&unknown_user, StatusCode::NOT_FOUND, "User not found");
    }
}
