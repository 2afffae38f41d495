//! Blogs: posts written by a user and filed under one of their categories.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod get;
mod list;
mod query;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{AppState, pagination::PaginationConfig};

pub use create::create_blog_endpoint;
pub use db::{
    create_blog, create_blog_table, delete_blog, get_blog_for_owner, get_blog_for_user,
    update_blog,
};
#[cfg(test)]
pub use db::get_blog;
pub use delete::delete_blog_endpoint;
pub use domain::{Blog, BlogChanges, BlogForm, BlogListQuery, BlogOwnerQuery, NewBlog};
pub use edit::update_blog_endpoint;
pub use get::get_blog_endpoint;
pub use list::get_blogs_endpoint;
pub use query::{BlogFilter, query_blogs};

/// The state needed by the blog endpoints.
#[derive(Debug, Clone)]
pub struct BlogEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
    /// Page defaults and limits for the blog list.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for BlogEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}
