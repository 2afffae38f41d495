//! Database operations for users.

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    database_id::{DatabaseId, UserId},
    password::PasswordHash,
    timestamp::{get_timestamp, now, to_nanos},
    user::{User, Username},
};

const USER_COLUMNS: &str = "id, username, email, created_at, updated_at";

/// Create the user table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS user (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );",
    )?;

    Ok(())
}

/// Create and insert a new user into the database.
///
/// # Errors
///
/// Returns [Error::Conflict] if the username or email is already taken, or
/// [Error::SqlError] if another SQL related error occurred.
pub fn create_user(
    username: Username,
    email: &str,
    password_hash: &PasswordHash,
    connection: &Connection,
) -> Result<User, Error> {
    let id = DatabaseId::generate();
    let created_at = now();
    let timestamp = to_nanos(created_at)?;

    connection.execute(
        "INSERT INTO user (id, username, email, password, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        (
            id,
            username.as_ref(),
            email,
            password_hash.as_ref(),
            timestamp,
        ),
    )?;

    Ok(User {
        id,
        username,
        email: email.to_owned(),
        created_at,
        updated_at: created_at,
    })
}

/// Get the user with an ID equal to `user_id`, or `None` if there is no such user.
///
/// # Errors
///
/// Returns [Error::SqlError] if there was an error trying to access the store.
pub fn get_user(user_id: UserId, connection: &Connection) -> Result<Option<User>, Error> {
    connection
        .prepare(&format!("SELECT {USER_COLUMNS} FROM user WHERE id = :id"))?
        .query_row(&[(":id", &user_id)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Retrieve all users in the order they signed up.
pub fn get_all_users(connection: &Connection) -> Result<Vec<User>, Error> {
    connection
        .prepare(&format!(
            "SELECT {USER_COLUMNS} FROM user ORDER BY created_at ASC, rowid ASC"
        ))?
        .query_map([], map_row)?
        .map(|maybe_user| maybe_user.map_err(|error| error.into()))
        .collect()
}

/// Find a user that has either the given username or the given email.
pub fn find_user_by_username_or_email(
    username: &Username,
    email: &str,
    connection: &Connection,
) -> Result<Option<User>, Error> {
    connection
        .prepare(&format!(
            "SELECT {USER_COLUMNS} FROM user WHERE username = ?1 OR email = ?2 LIMIT 1"
        ))?
        .query_row((username.as_ref(), email), map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Change a user's username and return the updated user, or `None` if the user doesn't exist.
///
/// # Errors
///
/// Returns [Error::Conflict] if another user already has `username`.
pub fn update_username(
    user_id: UserId,
    username: &Username,
    connection: &Connection,
) -> Result<Option<User>, Error> {
    let updated_at = to_nanos(now())?;

    connection
        .prepare(&format!(
            "UPDATE user SET username = ?1, updated_at = ?2 WHERE id = ?3 RETURNING {USER_COLUMNS}"
        ))?
        .query_row((username.as_ref(), updated_at, user_id), map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Delete a user and return the removed user, or `None` if the user doesn't exist.
///
/// The user's categories and blogs are left untouched.
pub fn delete_user(user_id: UserId, connection: &Connection) -> Result<Option<User>, Error> {
    connection
        .prepare(&format!(
            "DELETE FROM user WHERE id = ?1 RETURNING {USER_COLUMNS}"
        ))?
        .query_row([user_id], map_row)
        .optional()
        .map_err(|error| error.into())
}

fn map_row(row: &Row) -> Result<User, rusqlite::Error> {
    let raw_username: String = row.get(1)?;

    Ok(User {
        id: row.get(0)?,
        username: Username::new_unchecked(&raw_username),
        email: row.get(2)?,
        created_at: get_timestamp(row, 3)?,
        updated_at: get_timestamp(row, 4)?,
    })
}
