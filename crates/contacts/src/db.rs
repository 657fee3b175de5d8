//! Database connection for the contact store.

use anyhow::Context;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Open a `SQLite` pool for `url`.
///
/// In-memory databases are private to a connection, so they get a single one.
///
/// # Errors
///
/// Returns error if the database cannot be opened
pub async fn connect(url: &str) -> anyhow::Result<SqlitePool> {
    let max_connections = if url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .connect(url)
        .await
        .with_context(|| format!("Failed to connect to database {url}"))
}
