//! Categories: named groups of blogs owned by a single user.

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

pub use create::create_category_endpoint;
pub use db::{
    create_category, create_category_table, delete_category, get_categories_for_user,
    get_category, update_category_title,
};
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryForm, CategoryQuery, CategoryTitle};
pub use edit::update_category_endpoint;
pub use list::get_categories_endpoint;

/// The state needed by the category endpoints.
#[derive(Debug, Clone)]
pub struct CategoryEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
