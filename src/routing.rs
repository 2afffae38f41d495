//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, patch},
};

use crate::{
    AppState,
    blog::{
        create_blog_endpoint, delete_blog_endpoint, get_blog_endpoint, get_blogs_endpoint,
        update_blog_endpoint,
    },
    category::{
        create_category_endpoint, delete_category_endpoint, get_categories_endpoint,
        update_category_endpoint,
    },
    endpoints,
    logging::logging_middleware,
    response::ApiResponse,
    user::{
        create_user_endpoint, delete_user_endpoint, get_users_endpoint, update_user_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::USERS,
            get(get_users_endpoint)
                .post(create_user_endpoint)
                .patch(update_user_endpoint)
                .delete(delete_user_endpoint),
        )
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::CATEGORY,
            patch(update_category_endpoint).delete(delete_category_endpoint),
        )
        .route(
            endpoints::BLOGS,
            get(get_blogs_endpoint).post(create_blog_endpoint),
        )
        .route(
            endpoints::BLOG,
            get(get_blog_endpoint)
                .patch(update_blog_endpoint)
                .delete(delete_blog_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        ApiResponse::<()>::failure("Resource not found"),
    )
        .into_response()
}

#[cfg(test)]
mod routing_tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        blog::Blog,
        category::Category,
        endpoints::{self, format_endpoint},
        response::ApiResponse,
        test_utils::{assert_failure, get_test_server, get_test_state},
        user::User,
    };

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let state = get_test_state();
        let server = get_test_server(&state);

        let response = server.get("/definitely/not/a/route").await;

        assert_failure(&response, StatusCode::NOT_FOUND, "Resource not found");
    }

    #[tokio::test]
    async fn user_category_and_blog_round_trip() {
        let state = get_test_state();
        let server = get_test_server(&state);

        let user = server
            .post(endpoints::USERS)
            .json(&json!({"username": "al", "email": "a@example.com", "password": "pw"}))
            .await
            .json::<ApiResponse<User>>()
            .data
            .expect("want created user");
        let category = server
            .post(endpoints::CATEGORIES)
            .add_query_param("userId", user.id)
            .json(&json!({"title": "Tech"}))
            .await
            .json::<ApiResponse<Category>>()
            .data
            .expect("want created category");
        let blog = server
            .post(endpoints::BLOGS)
            .add_query_param("userId", user.id)
            .add_query_param("categoryId", category.id)
            .json(&json!({"title": "T", "description": "D"}))
            .await
            .json::<ApiResponse<Blog>>()
            .data
            .expect("want created blog");

        let fetched = server
            .get(&format_endpoint(endpoints::BLOG, blog.id))
            .add_query_param("userId", user.id)
            .add_query_param("categoryId", category.id)
            .await
            .json::<ApiResponse<Blog>>();
        let listed = server
            .get(endpoints::BLOGS)
            .add_query_param("userId", user.id)
            .add_query_param("categoryId", category.id)
            .await
            .json::<ApiResponse<Vec<Blog>>>();

        assert_eq!(fetched.data, Some(blog.clone()));
        assert_eq!(listed.data, Some(vec![blog]));
    }
}
