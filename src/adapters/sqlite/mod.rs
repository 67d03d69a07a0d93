//! SQLite adapters and pool construction.

mod cafe_repository;

pub use cafe_repository::SqliteCafeRepository;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;

/// Opens a connection pool against the configured SQLite database.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(config.create_if_missing);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(options)
        .await
}

/// Creates the cafe table if it does not exist yet.
///
/// The schema mirrors `Cafe::COLUMNS`; there is no migration story beyond
/// this implicit creation.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cafe (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            map_url TEXT NOT NULL,
            img_url TEXT NOT NULL,
            location TEXT NOT NULL,
            has_sockets INTEGER NOT NULL,
            has_toilet INTEGER NOT NULL,
            has_wifi INTEGER NOT NULL,
            can_take_calls INTEGER NOT NULL,
            seats TEXT NOT NULL,
            coffee_price TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
