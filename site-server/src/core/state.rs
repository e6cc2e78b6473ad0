use std::sync::Arc;

use crate::content::ContentLoader;
use crate::core::Config;
use crate::db::{DbError, DbService, DocumentStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// Cloned into every handler; all fields are cheap `Arc`/pool clones.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub started_at: std::time::Instant,
}

impl ServerState {
    /// Open the configured database and build the state
    pub async fn initialize(config: &Config) -> Result<Self, DbError> {
        let db = if config.database_url.starts_with("sqlite::memory:") {
            DbService::in_memory().await?
        } else {
            ensure_parent_dir(&config.database_url);
            DbService::new(&config.database_url).await?
        };
        Ok(Self::with_db(config.clone(), db))
    }

    pub fn with_db(config: Config, db: DbService) -> Self {
        Self {
            config: Arc::new(config),
            db,
            started_at: std::time::Instant::now(),
        }
    }

    pub fn store(&self) -> DocumentStore {
        self.db.documents()
    }

    pub fn loader(&self) -> ContentLoader {
        ContentLoader::new(self.store())
    }
}

/// Create the directory of a file-backed SQLite URL so `create_if_missing` can succeed
fn ensure_parent_dir(url: &str) {
    let path = url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = std::path::Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        tracing::warn!(dir = %parent.display(), error = %e, "Failed to create database directory");
    }
}
