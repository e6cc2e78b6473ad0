//! Database Module
//!
//! Handles the SQLite connection pool, migrations and the JSON document store

pub mod documents;
pub mod merge;

pub use documents::{BatchSummary, DocumentStore, WriteBatch, WriteOp};
pub use merge::deep_merge;

use shared::error::{AppError, ErrorCode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Store-layer error types
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Corrupted document {collection}/{id}: {source}")]
    Corrupted {
        collection: String,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Document {collection}/{id} is not a JSON object")]
    NotAnObject { collection: String, id: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid database url: {0}")]
    Config(String),
}

/// Result type for store operations
pub type DbResult<T> = Result<T, DbError>;

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Corrupted { collection, id, .. } => AppError::with_message(
                ErrorCode::ContentCorrupted,
                format!("Stored document {collection}/{id} could not be read"),
            ),
            DbError::NotAnObject { collection, id } => AppError::with_message(
                ErrorCode::InvalidRecord,
                format!("Document {collection}/{id} must be a JSON object"),
            ),
            DbError::Config(msg) => AppError::with_message(ErrorCode::ConfigError, msg),
            other => AppError::database(other.to_string()),
        }
    }
}

/// Database service: owns the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (creating if missing) the database at `url` with WAL mode and run migrations
    pub async fn new(url: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| DbError::Config(format!("{url}: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // 写冲突时等待 5s 而非立即失败
            .busy_timeout(Duration::from_secs(5))
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");
        Self::migrate(pool).await
    }

    /// Private in-memory database, used by tests and demos.
    ///
    /// A single connection that never expires; every new connection to
    /// `sqlite::memory:` would otherwise see an empty database.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::Config(e.to_string()))?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> DbResult<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
        Ok(Self { pool })
    }

    /// Document store over this pool
    pub fn documents(&self) -> DocumentStore {
        DocumentStore::new(self.pool.clone())
    }

    /// Liveness check for `/health`
    pub async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
