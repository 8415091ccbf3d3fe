//! Database connection and initialization.

use anyhow::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

pub const IN_MEMORY_PATH: &str = ":memory:";

/// Database connection wrapper.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Pool settings for a database path.
///
/// An in-memory database lives only as long as its connection, so that
/// single connection is opened eagerly and never reaped or recycled.
fn pool_options(db_path: &str, max_connections: u32) -> SqlitePoolOptions {
    if db_path == IN_MEMORY_PATH {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    }
}

/// Initialize the SQLite database.
///
/// Creates the database file if it doesn't exist, applies the embedded
/// migrations, and returns a connection pool.
pub async fn init_database(db_path: &str, max_connections: u32) -> Result<Database> {
    if let Some(parent) = Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path);

    info!("Connecting to database: {}", db_path);

    let pool = pool_options(db_path, max_connections)
        .connect(&db_url)
        .await?;

    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations complete");

    Ok(Database { pool })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_count(db: &Database) -> i32 {
        let result: (i32,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('estates', 'trees')",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        result.0
    }

    #[tokio::test]
    async fn test_init_database() {
        let db = init_database(IN_MEMORY_PATH, 1).await.unwrap();
        assert_eq!(table_count(&db).await, 2);
    }

    #[test]
    fn in_memory_pool_keeps_its_connection() {
        let options = pool_options(IN_MEMORY_PATH, 8);
        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }

    #[test]
    fn file_pool_uses_configured_size() {
        let options = pool_options("data/estate.db", 8);
        assert_eq!(options.get_max_connections(), 8);
    }

    #[tokio::test]
    async fn reopening_a_file_database_keeps_data() {
        let path = std::env::temp_dir()
            .join(format!("estate-test-{}.db", uuid::Uuid::new_v4()))
            .to_string_lossy()
            .to_string();

        let db = init_database(&path, 2).await.unwrap();
        sqlx::query("INSERT INTO estates (id, width, length, created_at) VALUES ('e1', 5, 5, '2024-01-01T00:00:00Z')")
            .execute(db.pool())
            .await
            .unwrap();
        db.pool().close().await;

        let reopened = init_database(&path, 2).await.unwrap();
        assert_eq!(table_count(&reopened).await, 2);
        let count: (i32,) = sqlx::query_as("SELECT COUNT(*) FROM estates")
            .fetch_one(reopened.pool())
            .await
            .unwrap();
        assert_eq!(count.0, 1);
        reopened.pool().close().await;
        let _ = std::fs::remove_file(&path);
    }
}
