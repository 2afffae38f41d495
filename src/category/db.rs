//! Database operations for categories.

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    category::{Category, CategoryTitle},
    database_id::{CategoryId, DatabaseId, UserId},
    timestamp::{get_timestamp, now, to_nanos},
};

const CATEGORY_COLUMNS: &str = "id, title, user_id, created_at, updated_at";

/// Initialize the category table and indexes.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            user_id TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_category_user ON category(user_id);",
    )?;

    Ok(())
}

/// Create a category owned by `user_id` and return it with its generated ID.
///
/// The caller is responsible for checking that the user exists.
pub fn create_category(
    user_id: UserId,
    title: CategoryTitle,
    connection: &Connection,
) -> Result<Category, Error> {
    let id = DatabaseId::generate();
    let created_at = now();

    connection.execute(
        "INSERT INTO category (id, title, user_id, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?4)",
        (id, title.as_ref(), user_id, to_nanos(created_at)?),
    )?;

    Ok(Category {
        id,
        title,
        user_id,
        created_at,
        updated_at: created_at,
    })
}

/// Retrieve a single category by ID regardless of its owner.
pub fn get_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Option<Category>, Error> {
    connection
        .prepare(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM category WHERE id = :id"
        ))?
        .query_row(&[(":id", &category_id)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Retrieve all categories owned by `user_id` in creation order.
pub fn get_categories_for_user(
    user_id: UserId,
    connection: &Connection,
) -> Result<Vec<Category>, Error> {
    connection
        .prepare(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM category WHERE user_id = :user_id
            ORDER BY created_at ASC, rowid ASC"
        ))?
        .query_map(&[(":user_id", &user_id)], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Rename the category with `category_id` if, and only if, it is owned by `user_id`.
///
/// Returns `None` when no category matches both IDs.
pub fn update_category_title(
    category_id: CategoryId,
    user_id: UserId,
    title: &CategoryTitle,
    connection: &Connection,
) -> Result<Option<Category>, Error> {
    let updated_at = to_nanos(now())?;

    connection
        .prepare(&format!(
            "UPDATE category SET title = ?1, updated_at = ?2
            WHERE id = ?3 AND user_id = ?4
            RETURNING {CATEGORY_COLUMNS}"
        ))?
        .query_row((title.as_ref(), updated_at, category_id, user_id), map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Delete the category with `category_id` if, and only if, it is owned by `user_id`.
///
/// Returns the removed category, or `None` when no category matches both IDs.
/// Blogs filed under the category are left untouched.
pub fn delete_category(
    category_id: CategoryId,
    user_id: UserId,
    connection: &Connection,
) -> Result<Option<Category>, Error> {
    connection
        .prepare(&format!(
            "DELETE FROM category WHERE id = ?1 AND user_id = ?2 RETURNING {CATEGORY_COLUMNS}"
        ))?
        .query_row((category_id, user_id), map_row)
        .optional()
        .map_err(|error| error.into())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let raw_title: String = row.get(1)?;

    Ok(Category {
        id: row.get(0)?,
        title: CategoryTitle::new_unchecked(&raw_title),
        user_id: row.get(2)?,
        created_at: get_timestamp(row, 3)?,
        updated_at: get_timestamp(row, 4)?,
    })
}
