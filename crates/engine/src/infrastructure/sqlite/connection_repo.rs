//! SQLite-backed connections.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;

use patchbay_domain::{Connection, ConnectionId, DiagramId};

use super::rows;
use crate::infrastructure::ports::{ConnectionRepo, RepoError};

pub struct SqliteConnectionRepo {
    pool: SqlitePool,
}

impl SqliteConnectionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: &SqliteRow) -> Result<Connection, RepoError> {
        Ok(Connection {
            id: rows::id(row, "id")?,
            diagram_id: rows::id(row, "diagram_id")?,
            source_diagram_device_id: rows::id(row, "source_diagram_device_id")?,
            source_io_id: rows::id(row, "source_io_id")?,
            target_diagram_device_id: rows::id(row, "target_diagram_device_id")?,
            target_io_id: rows::id(row, "target_io_id")?,
            cable_label: rows::optional_text(row, "cable_label")?,
            cable_length: rows::optional_text(row, "cable_length")?,
            notes: rows::optional_text(row, "notes")?,
            created_at: rows::timestamp(row, "created_at")?,
            updated_at: rows::timestamp(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl ConnectionRepo for SqliteConnectionRepo {
    async fn get(&self, id: ConnectionId) -> Result<Option<Connection>, RepoError> {
        let row = sqlx::query("SELECT * FROM connections WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("connection.get", e))?;
        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list(&self, diagram_id: Option<DiagramId>) -> Result<Vec<Connection>, RepoError> {
        let query = match diagram_id {
            Some(diagram_id) => sqlx::query(
                "SELECT * FROM connections WHERE diagram_id = ? ORDER BY created_at, rowid",
            )
            .bind(diagram_id.to_string()),
            None => sqlx::query("SELECT * FROM connections ORDER BY created_at, rowid"),
        };
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("connection.list", e))?;
        rows.iter().map(Self::from_row).collect()
    }

    async fn insert_if_ports_free(&self, connection: &Connection) -> Result<bool, RepoError> {
        let source = connection.source_io_id.to_string();
        let target = connection.target_io_id.to_string();
        let diagram = connection.diagram_id.to_string();

        let result = sqlx::query(
            r#"
            INSERT INTO connections
                (id, diagram_id, source_diagram_device_id, source_io_id,
                 target_diagram_device_id, target_io_id,
                 cable_label, cable_length, notes, created_at, updated_at)
            SELECT ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?
            WHERE NOT EXISTS (
                SELECT 1 FROM connections
                WHERE diagram_id = ?
                  AND (source_io_id IN (?, ?) OR target_io_id IN (?, ?))
            )
            "#,
        )
        .bind(connection.id.to_string())
        .bind(diagram.as_str())
        .bind(connection.source_diagram_device_id.to_string())
        .bind(source.as_str())
        .bind(connection.target_diagram_device_id.to_string())
        .bind(target.as_str())
        .bind(connection.cable_label.as_deref())
        .bind(connection.cable_length.as_deref())
        .bind(connection.notes.as_deref())
        .bind(connection.created_at.to_rfc3339())
        .bind(connection.updated_at.to_rfc3339())
        .bind(diagram.as_str())
        .bind(source.as_str())
        .bind(target.as_str())
        .bind(source.as_str())
        .bind(target.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| rows::write_error("connection.insert", e))?;

        let inserted = result.rows_affected() == 1;
        if inserted {
            tracing::debug!(connection_id = %connection.id, diagram_id = %connection.diagram_id, "Inserted connection");
        }
        Ok(inserted)
    }

    async fn delete(&self, id: ConnectionId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM connections WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("connection.delete", e))?;
        Ok(result.rows_affected() > 0)
    }
}
