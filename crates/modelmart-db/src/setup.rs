//! Database setup and initialization.
//!
//! Entry points call `setup_database()` with the configured connection
//! string. It connects, pings the store and ensures the schema exists.

use std::str::FromStr;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

/// Sets up the `SQLite` document store and ensures the schema exists.
///
/// This function:
/// 1. Opens a pool for `database_url`, creating the database file if missing
/// 2. Pings the store so connection problems surface at startup
/// 3. Creates the `models` and `purchases` tables and indexes
///
/// In-memory URLs (`sqlite::memory:`) get a single connection that is never
/// recycled, so the data lives as long as the pool.
///
/// # Example
///
/// ```rust,no_run
/// use modelmart_db::setup_database;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database("sqlite://modelmart.db").await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(database_url: &str) -> Result<SqlitePool> {
    let in_memory = is_in_memory(database_url);

    let mut options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    let pool = pool_options.connect_with(options).await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    tracing::info!(
        target: "modelmart.db",
        in_memory,
        "Connected to document store"
    );

    create_schema(&pool).await?;
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    setup_database("sqlite::memory:").await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // `seq` keeps insertion order; `id` is the public document identifier
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS models (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            fields TEXT NOT NULL DEFAULT '{}',
            purchased INTEGER NOT NULL DEFAULT 0 CHECK (purchased >= 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // No foreign key: purchase history outlives the model it references
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS purchases (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            model_id TEXT NOT NULL,
            buyer_email TEXT NOT NULL,
            purchased_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_purchases_model_id ON purchases(model_id)")
        .execute(pool)
        .await?;

    Ok(())
}
