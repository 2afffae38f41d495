//! Core blog domain types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database_id::{BlogId, CategoryId, UserId};

/// A post with a title and description, written by one user under one of their categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// The blog's ID in the application database.
    #[serde(rename = "_id")]
    pub id: BlogId,
    /// The headline of the blog.
    pub title: String,
    /// The body text of the blog.
    pub description: String,
    /// The user that wrote the blog.
    #[serde(rename = "user")]
    pub user_id: UserId,
    /// The category the blog is filed under.
    #[serde(rename = "category")]
    pub category_id: CategoryId,
    /// When the blog was written.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the title or description last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The validated fields for a new blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    /// The headline, already trimmed and non-empty.
    pub title: String,
    /// The body text, already trimmed and non-empty.
    pub description: String,
    /// The author, who must exist.
    pub user_id: UserId,
    /// The category to file the blog under, which must exist.
    pub category_id: CategoryId,
}

/// The fields to change on an existing blog. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Request body for creating or updating a blog.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogForm {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Query parameters naming the user, and optionally the category, a blog request acts for.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogOwnerQuery {
    pub user_id: Option<String>,
    pub category_id: Option<String>,
}

/// Query parameters for listing blogs.
///
/// Values are kept as raw text so that each one can be validated with its own
/// error message.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogListQuery {
    pub user_id: Option<String>,
    pub category_id: Option<String>,
    pub search_keyword: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}
