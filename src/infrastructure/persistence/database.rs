//! SQLite connection pool setup and embedded migrations.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Migrations from `./migrations`, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool for `database_url`, creating the file if needed.
///
/// An in-memory database lives only as long as its connection, and each
/// connection gets a private one, so `sqlite::memory:` URLs are pinned to a
/// single connection that is never recycled.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    connect_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = is_in_memory(database_url);

    let mut options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool_options = SqlitePoolOptions::new().acquire_timeout(connect_timeout);
    let pool_options = if in_memory {
        pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(max_connections)
    };

    pool_options.connect_with(options).await
}

/// Applies all pending migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
