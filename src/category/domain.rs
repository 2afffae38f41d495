//! Core category domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    database_id::{CategoryId, UserId},
};

/// A validated, non-empty category title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryTitle(String);

impl CategoryTitle {
    /// Create a category title.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::Validation] if `title` is empty or only whitespace.
    pub fn new(title: &str) -> Result<Self, Error> {
        let title = title.trim();

        if title.is_empty() {
            Err(Error::Validation("Title is required.".to_owned()))
        } else {
            Ok(Self(title.to_string()))
        }
    }

    /// Create a category title without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(title: &str) -> Self {
        Self(title.to_string())
    }
}

impl AsRef<str> for CategoryTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named group of blogs belonging to one user (e.g., 'Tech', 'Travel').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// The category's ID in the application database.
    #[serde(rename = "_id")]
    pub id: CategoryId,
    /// The display name of the category.
    pub title: CategoryTitle,
    /// The user that owns the category.
    #[serde(rename = "user")]
    pub user_id: UserId,
    /// When the category was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the category was last renamed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Request body for creating and renaming a category.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryForm {
    pub title: Option<String>,
}

/// Query parameters naming the user a category request acts for.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryQuery {
    pub user_id: Option<String>,
}

#[cfg(test)]
mod category_title_tests {
    use crate::{Error, category::CategoryTitle};

    #[test]
    fn new_fails_on_empty_string() {
        assert_eq!(
            CategoryTitle::new(""),
            Err(Error::Validation("Title is required.".to_owned()))
        );
    }

    #[test]
    fn new_succeeds_on_non_empty_string() {
        assert!(CategoryTitle::new("🔥").is_ok());
    }
}
