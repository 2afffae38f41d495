//! Quill is a JSON REST API for a small multi-user blogging platform.
//!
//! Users own categories, and blogs are filed under one of their owner's
//! categories. Every request names the user it acts for, and records owned by
//! someone else are reported as not found.
//!
//! This library provides the router, the store and the handlers. The `server`
//! binary wires them up to a SQLite database file.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod blog;
mod category;
mod database_id;
mod db;
mod endpoints;
mod error;
mod logging;
mod pagination;
mod password;
mod response;
mod routing;
mod timestamp;
mod user;
mod validation;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::{DatabaseId, InvalidDatabaseId};
pub use db::{close as close_db, initialize as initialize_db};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::PaginationConfig;
pub use password::PasswordHash;
pub use response::ApiResponse;
pub use routing::build_router;

/// Types and store functions for seeding a database outside of the HTTP API.
pub mod seed {
    pub use crate::{
        blog::{Blog, NewBlog, create_blog},
        category::{Category, CategoryTitle, create_category},
        user::{User, Username, create_user},
    };
}

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
