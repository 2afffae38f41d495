use axum_test::TestServer;
use rusqlite::Connection;

use crate::{
    AppState,
    blog::{Blog, NewBlog, create_blog},
    build_router,
    category::{Category, CategoryTitle, create_category},
    database_id::{CategoryId, UserId},
    pagination::PaginationConfig,
    password::PasswordHash,
    user::{User, Username, create_user},
};

/// The lowest cost bcrypt accepts, so that tests that create users stay fast.
const TEST_PASSWORD_COST: u32 = 4;

#[track_caller]
pub(crate) fn get_test_state() -> AppState {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");

    AppState::new(connection, PaginationConfig::default(), TEST_PASSWORD_COST)
        .expect("Could not create app state.")
}

#[track_caller]
pub(crate) fn get_test_server(state: &AppState) -> TestServer {
    TestServer::new(build_router(state.clone()))
}

#[track_caller]
pub(crate) fn insert_test_user(state: &AppState, username: &str) -> User {
    let password_hash = PasswordHash::from_raw_password("hunter2", TEST_PASSWORD_COST)
        .expect("Could not hash password.");

    create_user(
        Username::new_unchecked(username),
        &format!("{username}@example.com"),
        &password_hash,
        &state.db_connection.lock().unwrap(),
    )
    .expect("Could not create test user.")
}

#[track_caller]
pub(crate) fn insert_test_category(state: &AppState, user_id: UserId, title: &str) -> Category {
    create_category(
        user_id,
        CategoryTitle::new_unchecked(title),
        &state.db_connection.lock().unwrap(),
    )
    .expect("Could not create test category.")
}

#[track_caller]
pub(crate) fn insert_test_blog(
    state: &AppState,
    user_id: UserId,
    category_id: CategoryId,
    title: &str,
    description: &str,
) -> Blog {
    create_blog(
        NewBlog {
            title: title.to_owned(),
            description: description.to_owned(),
            user_id,
            category_id,
        },
        &state.db_connection.lock().unwrap(),
    )
    .expect("Could not create test blog.")
}
