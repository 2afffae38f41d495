//! Sign-up endpoint for new users.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    Error,
    db::lock_connection,
    error::DUPLICATE_USER_MESSAGE,
    password::PasswordHash,
    response::respond,
    user::{
        CreateUserForm, UserEndpointState, Username, create_user, find_user_by_username_or_email,
    },
    validation::{non_empty, parse_body, parse_email},
};

/// Create a user from a username, email and password.
///
/// Checks run in this order: required fields, email format, then a single
/// duplicate check on username OR email. Only the salted hash of the password
/// is stored, and the response never includes it.
pub async fn create_user_endpoint(
    State(state): State<UserEndpointState>,
    body: Result<Json<CreateUserForm>, JsonRejection>,
) -> Result<Response, Error> {
    let form = parse_body(body)?;

    let (Some(raw_username), Some(raw_email), Some(password)) = (
        non_empty(form.username.as_deref()),
        non_empty(form.email.as_deref()),
        form.password.as_deref().filter(|password| !password.is_empty()),
    ) else {
        return Err(Error::Validation("Missing required fields".to_owned()));
    };

    let email = parse_email(raw_email)?;
    let username = Username::new(raw_username)?;

    {
        let connection = lock_connection(&state.db_connection)?;

        if find_user_by_username_or_email(&username, email.as_str(), &connection)?.is_some() {
            return Err(Error::Conflict(DUPLICATE_USER_MESSAGE.to_owned()));
        }
    }

    // Hash outside the lock, the unique indexes catch a concurrent sign-up.
    let password_hash = PasswordHash::from_raw_password(password, state.password_cost)?;

    let connection = lock_connection(&state.db_connection)?;
    let user = create_user(username, email.as_str(), &password_hash, &connection)?;

    tracing::info!("Created user {}", user.id);

    Ok(respond(StatusCode::CREATED, "User created successfully", user))
}
