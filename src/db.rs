//! Set up and tear down of the application's database.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, functions::FunctionFlags};

use crate::{
    Error, blog::create_blog_table, category::create_category_table, user::create_user_table,
};

/// The SQL function that lowercases text with Unicode case rules.
///
/// SQLite's own `lower` and `LIKE` only fold ASCII letters.
pub const FOLD_CASE_FUNCTION: &str = "fold_case";

/// Register the application's SQL functions and create the user, category and
/// blog collections if they do not exist yet.
///
/// Functions only live as long as `connection`, so this must run on every new
/// connection.
///
/// # Errors
///
/// Returns an error if a function could not be registered or any of the tables
/// could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    register_functions(connection)?;

    let transaction = connection.unchecked_transaction()?;

    create_user_table(&transaction)?;
    create_category_table(&transaction)?;
    create_blog_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Register [FOLD_CASE_FUNCTION] on `connection`.
///
/// The function maps `NULL` to `NULL`.
pub fn register_functions(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.create_scalar_function(
        FOLD_CASE_FUNCTION,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |context| {
            let text: Option<String> = context.get(0)?;

            Ok(text.map(|text| text.to_lowercase()))
        },
    )
}

/// Acquire the shared database connection.
///
/// # Errors
///
/// Returns [Error::DatabaseLockError] if the lock is poisoned.
pub fn lock_connection(
    db_connection: &Arc<Mutex<Connection>>,
) -> Result<MutexGuard<'_, Connection>, Error> {
    db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)
}

/// Close the shared database connection.
///
/// If other handles to the connection are still alive, only this handle is
/// dropped and the connection closes once the last handle goes away.
///
/// # Errors
///
/// Returns an error if the lock was poisoned or SQLite could not close the connection.
pub fn close(db_connection: Arc<Mutex<Connection>>) -> Result<(), Error> {
    let mutex = match Arc::try_unwrap(db_connection) {
        Ok(mutex) => mutex,
        Err(shared) => {
            tracing::warn!(
                "database connection is still shared by {} other handle(s), deferring close",
                Arc::strong_count(&shared) - 1
            );
            return Ok(());
        }
    };

    let connection = mutex.into_inner().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    connection.close().map_err(|(_, error)| error.into())
}
