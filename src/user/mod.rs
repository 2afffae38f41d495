//! Users: the identity root that owns categories and blogs.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod list;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

pub use create::create_user_endpoint;
pub use db::{
    create_user, create_user_table, delete_user, find_user_by_username_or_email, get_all_users,
    get_user, update_username,
};
pub use delete::delete_user_endpoint;
pub use domain::{CreateUserForm, DeleteUserQuery, UpdateUserForm, User, Username};
pub use edit::update_user_endpoint;
pub use list::get_users_endpoint;

/// The state needed by the user endpoints.
#[derive(Debug, Clone)]
pub struct UserEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
    /// The bcrypt cost used when hashing new passwords.
    pub password_cost: u32,
}

impl FromRef<AppState> for UserEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            password_cost: state.password_cost,
        }
    }
}
