use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use quill_rs::{
    PasswordHash, initialize_db,
    seed::{CategoryTitle, NewBlog, Username, create_blog, create_category, create_user},
};

/// A utility for creating a test database for the REST API server of quill_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test user...");

    let password_hash = PasswordHash::from_raw_password("test", PasswordHash::DEFAULT_COST)?;
    let user = create_user(
        Username::new("test")?,
        "test@example.com",
        &password_hash,
        &conn,
    )?;

    println!("Creating categories and blogs...");

    for (title, blogs) in [
        (
            "Tech",
            [
                ("Learning Rust", "Notes on ownership and borrowing."),
                ("SQLite tips", "Indexes, RETURNING and in-memory databases."),
            ],
        ),
        (
            "Travel",
            [
                ("Tokyo", "Trains that run on time."),
                ("Wellington", "Windy, but worth it."),
            ],
        ),
    ] {
        let category = create_category(user.id, CategoryTitle::new(title)?, &conn)?;

        for (title, description) in blogs {
            create_blog(
                NewBlog {
                    title: title.to_owned(),
                    description: description.to_owned(),
                    user_id: user.id,
                    category_id: category.id,
                },
                &conn,
            )?;
        }
    }

    println!("Success! Log in as user {} ({})", user.username, user.id);

    Ok(())
}
