//! SQLite-backed device placements.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;

use patchbay_domain::{DiagramDevice, DiagramDeviceId, DiagramId};

use super::rows;
use crate::infrastructure::ports::{DiagramDeviceRepo, RepoError};

pub struct SqliteDiagramDeviceRepo {
    pool: SqlitePool,
}

impl SqliteDiagramDeviceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: &SqliteRow) -> Result<DiagramDevice, RepoError> {
        Ok(DiagramDevice {
            id: rows::id(row, "id")?,
            diagram_id: rows::id(row, "diagram_id")?,
            device_id: rows::id(row, "device_id")?,
            position_x: rows::real(row, "position_x")?,
            position_y: rows::real(row, "position_y")?,
            rotation: rows::real(row, "rotation")?,
            created_at: rows::timestamp(row, "created_at")?,
            updated_at: rows::timestamp(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl DiagramDeviceRepo for SqliteDiagramDeviceRepo {
    async fn get(&self, id: DiagramDeviceId) -> Result<Option<DiagramDevice>, RepoError> {
        let row = sqlx::query("SELECT * FROM diagram_devices WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("diagram_device.get", e))?;
        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list(&self, diagram_id: Option<DiagramId>) -> Result<Vec<DiagramDevice>, RepoError> {
        let query = match diagram_id {
            Some(diagram_id) => sqlx::query(
                "SELECT * FROM diagram_devices WHERE diagram_id = ? ORDER BY created_at, rowid",
            )
            .bind(diagram_id.to_string()),
            None => sqlx::query("SELECT * FROM diagram_devices ORDER BY created_at, rowid"),
        };
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("diagram_device.list", e))?;
        rows.iter().map(Self::from_row).collect()
    }

    async fn save(&self, placed: &DiagramDevice) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO diagram_devices
                (id, diagram_id, device_id, position_x, position_y, rotation, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                position_x = excluded.position_x,
                position_y = excluded.position_y,
                rotation = excluded.rotation,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(placed.id.to_string())
        .bind(placed.diagram_id.to_string())
        .bind(placed.device_id.to_string())
        .bind(placed.position_x)
        .bind(placed.position_y)
        .bind(placed.rotation)
        .bind(placed.created_at.to_rfc3339())
        .bind(placed.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| rows::write_error("diagram_device.save", e))?;

        tracing::debug!(diagram_device_id = %placed.id, diagram_id = %placed.diagram_id, "Saved placement");
        Ok(())
    }

    async fn delete(&self, id: DiagramDeviceId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM diagram_devices WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("diagram_device.delete", e))?;
        Ok(result.rows_affected() > 0)
    }
}
