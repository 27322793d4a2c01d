//! SQLite persistence.
//!
//! One pool is shared by every repository. Enums are stored as their display
//! strings, ids as hyphenated UUID text, timestamps as RFC 3339.

mod connection_repo;
mod device_repo;
mod diagram_device_repo;
mod diagram_repo;
mod port_repo;
mod rows;
mod schema;

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

pub use connection_repo::SqliteConnectionRepo;
pub use device_repo::SqliteDeviceRepo;
pub use diagram_device_repo::SqliteDiagramDeviceRepo;
pub use diagram_repo::SqliteDiagramRepo;
pub use port_repo::SqlitePortRepo;
pub use schema::ensure_schema;

/// All SQLite repositories over one pool.
#[derive(Clone)]
pub struct SqliteRepositories {
    pub device: Arc<SqliteDeviceRepo>,
    pub port: Arc<SqlitePortRepo>,
    pub diagram: Arc<SqliteDiagramRepo>,
    pub diagram_device: Arc<SqliteDiagramDeviceRepo>,
    pub connection: Arc<SqliteConnectionRepo>,
}

impl SqliteRepositories {
    /// Open (creating if needed) the database file and ensure the schema.
    pub async fn connect(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;
        ensure_schema(&pool).await?;
        tracing::info!(db_path, "SQLite database ready");
        Ok(Self::new(pool))
    }

    pub fn new(pool: SqlitePool) -> Self {
        Self {
            device: Arc::new(SqliteDeviceRepo::new(pool.clone())),
            port: Arc::new(SqlitePortRepo::new(pool.clone())),
            diagram: Arc::new(SqliteDiagramRepo::new(pool.clone())),
            diagram_device: Arc::new(SqliteDiagramDeviceRepo::new(pool.clone())),
            connection: Arc::new(SqliteConnectionRepo::new(pool)),
        }
    }
}
