//! Database operations for blogs.

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    blog::{Blog, BlogChanges, NewBlog},
    database_id::{BlogId, CategoryId, DatabaseId, UserId},
    timestamp::{get_timestamp, now, to_nanos},
};

pub(super) const BLOG_COLUMNS: &str =
    "id, title, description, user_id, category_id, created_at, updated_at";

/// Initialize the blog table and indexes.
pub fn create_blog_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS blog (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            user_id TEXT NOT NULL,
            category_id TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_blog_owner
        ON blog(user_id, category_id, created_at);",
    )?;

    Ok(())
}

/// Insert a new blog and return it with its generated ID.
///
/// The caller is responsible for checking that the user and category exist.
pub fn create_blog(new_blog: NewBlog, connection: &Connection) -> Result<Blog, Error> {
    let id = DatabaseId::generate();
    let created_at = now();

    connection.execute(
        "INSERT INTO blog (id, title, description, user_id, category_id, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
        (
            id,
            &new_blog.title,
            &new_blog.description,
            new_blog.user_id,
            new_blog.category_id,
            to_nanos(created_at)?,
        ),
    )?;

    Ok(Blog {
        id,
        title: new_blog.title,
        description: new_blog.description,
        user_id: new_blog.user_id,
        category_id: new_blog.category_id,
        created_at,
        updated_at: created_at,
    })
}

/// Retrieve a blog by ID regardless of who owns it.
#[cfg(test)]
pub fn get_blog(blog_id: BlogId, connection: &Connection) -> Result<Option<Blog>, Error> {
    connection
        .prepare(&format!("SELECT {BLOG_COLUMNS} FROM blog WHERE id = :id"))?
        .query_row(&[(":id", &blog_id)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Retrieve a blog only if it was written by `user_id` under `category_id`.
pub fn get_blog_for_owner(
    blog_id: BlogId,
    user_id: UserId,
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Option<Blog>, Error> {
    connection
        .prepare(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog
            WHERE id = ?1 AND user_id = ?2 AND category_id = ?3"
        ))?
        .query_row((blog_id, user_id, category_id), map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Retrieve a blog only if it was written by `user_id`, in any category.
pub fn get_blog_for_user(
    blog_id: BlogId,
    user_id: UserId,
    connection: &Connection,
) -> Result<Option<Blog>, Error> {
    connection
        .prepare(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog WHERE id = ?1 AND user_id = ?2"
        ))?
        .query_row((blog_id, user_id), map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Apply `changes` to the blog if it was written by `user_id`.
///
/// Returns the updated blog, or `None` if no blog matches both IDs.
pub fn update_blog(
    blog_id: BlogId,
    user_id: UserId,
    changes: BlogChanges,
    connection: &Connection,
) -> Result<Option<Blog>, Error> {
    let updated_at = to_nanos(now())?;

    connection
        .prepare(&format!(
            "UPDATE blog
            SET title = COALESCE(?1, title),
                description = COALESCE(?2, description),
                updated_at = ?3
            WHERE id = ?4 AND user_id = ?5
            RETURNING {BLOG_COLUMNS}"
        ))?
        .query_row(
            (
                changes.title,
                changes.description,
                updated_at,
                blog_id,
                user_id,
            ),
            map_row,
        )
        .optional()
        .map_err(|error| error.into())
}

/// Delete the blog if it was written by `user_id`.
///
/// Returns the removed blog, or `None` if no blog matches both IDs.
pub fn delete_blog(
    blog_id: BlogId,
    user_id: UserId,
    connection: &Connection,
) -> Result<Option<Blog>, Error> {
    connection
        .prepare(&format!(
            "DELETE FROM blog WHERE id = ?1 AND user_id = ?2 RETURNING {BLOG_COLUMNS}"
        ))?
        .query_row((blog_id, user_id), map_row)
        .optional()
        .map_err(|error| error.into())
}

pub(super) fn map_row(row: &Row) -> Result<Blog, rusqlite::Error> {
    Ok(Blog {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        user_id: row.get(3)?,
        category_id: row.get(4)?,
        created_at: get_timestamp(row, 5)?,
        updated_at: get_timestamp(row, 6)?,
    })
}

#[cfg(test)]
mod blog_db_tests {
    use rusqlite::Connection;

    use crate::{
        blog::{
            BlogChanges, NewBlog, create_blog, create_blog_table, delete_blog, get_blog,
            get_blog_for_owner, get_blog_for_user, update_blog,
        },
        database_id::DatabaseId,
    };

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_blog_table(&connection).expect("Could not create blog table");
        connection
    }

    fn new_blog(user_id: DatabaseId, category_id: DatabaseId) -> NewBlog {
        NewBlog {
            title: "Rust".to_owned(),
            description: "Ownership and borrowing".to_owned(),
            user_id,
            category_id,
        }
    }

    #[test]
    fn create_blog_succeeds() {
        let connection = get_test_db_connection();
        let user_id = DatabaseId::generate();
        let category_id = DatabaseId::generate();

        let blog = create_blog(new_blog(user_id, category_id), &connection).unwrap();

        assert_eq!(blog.title, "Rust");
        assert_eq!(blog.user_id, user_id);
        assert_eq!(blog.category_id, category_id);
        assert_eq!(blog.created_at, blog.updated_at);
        assert_eq!(get_blog(blog.id, &connection), Ok(Some(blog)));
    }

    #[test]
    fn get_blog_for_owner_requires_user_and_category() {
        let connection = get_test_db_connection();
        let user_id = DatabaseId::generate();
        let category_id = DatabaseId::generate();
        let blog = create_blog(new_blog(user_id, category_id), &connection).unwrap();

        let wrong_category =
            get_blog_for_owner(blog.id, user_id, DatabaseId::generate(), &connection);
        let wrong_user =
            get_blog_for_owner(blog.id, DatabaseId::generate(), category_id, &connection);
        let right_owner = get_blog_for_owner(blog.id, user_id, category_id, &connection);

        assert_eq!(wrong_category, Ok(None));
        assert_eq!(wrong_user, Ok(None));
        assert_eq!(right_owner, Ok(Some(blog)));
    }

    #[test]
    fn get_blog_for_user_ignores_category() {
        let connection = get_test_db_connection();
        let user_id = DatabaseId::generate();
        let blog = create_blog(new_blog(user_id, DatabaseId::generate()), &connection).unwrap();

        assert_eq!(
            get_blog_for_user(blog.id, user_id, &connection),
            Ok(Some(blog.clone()))
        );
        assert_eq!(
            get_blog_for_user(blog.id, DatabaseId::generate(), &connection),
            Ok(None)
        );
    }

    #[test]
    fn update_changes_only_given_fields() {
        let connection = get_test_db_connection();
        let user_id = DatabaseId::generate();
        let blog = create_blog(new_blog(user_id, DatabaseId::generate()), &connection).unwrap();

        let updated = update_blog(
            blog.id,
            user_id,
            BlogChanges {
                title: Some("Lifetimes".to_owned()),
                description: None,
            },
            &connection,
        )
        .unwrap()
        .expect("want updated blog");

        assert_eq!(updated.title, "Lifetimes");
        assert_eq!(updated.description, blog.description);
        assert_eq!(updated.category_id, blog.category_id);
        assert_eq!(updated.created_at, blog.created_at);
        assert!(updated.updated_at >= blog.updated_at);
    }

    #[test]
    fn update_of_other_users_blog_changes_nothing() {
        let connection = get_test_db_connection();
        let blog = create_blog(
            new_blog(DatabaseId::generate(), DatabaseId::generate()),
            &connection,
        )
        .unwrap();

        let got = update_blog(
            blog.id,
            DatabaseId::generate(),
            BlogChanges {
                title: Some("Hijacked".to_owned()),
                description: Some("Hijacked".to_owned()),
            },
            &connection,
        );

        assert_eq!(got, Ok(None));
        assert_eq!(get_blog(blog.id, &connection), Ok(Some(blog)));
    }

    #[test]
    fn delete_requires_matching_user() {
        let connection = get_test_db_connection();
        let user_id = DatabaseId::generate();
        let blog = create_blog(new_blog(user_id, DatabaseId::generate()), &connection).unwrap();

        assert_eq!(
            delete_blog(blog.id, DatabaseId::generate(), &connection),
            Ok(None)
        );
        assert_eq!(
            delete_blog(blog.id, user_id, &connection),
            Ok(Some(blog.clone()))
        );
        assert_eq!(get_blog(blog.id, &connection), Ok(None));
    }
}
