//! SQLite-backed device ports.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;

use patchbay_domain::{ConnectorType, DeviceId, DeviceIo, DeviceLabel, PortId};

use super::rows;
use crate::infrastructure::ports::{PortRepo, RepoError};

pub struct SqlitePortRepo {
    pool: SqlitePool,
}

impl SqlitePortRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: &SqliteRow) -> Result<DeviceIo, RepoError> {
        Ok(DeviceIo {
            id: rows::id(row, "id")?,
            device_id: rows::id(row, "device_id")?,
            label: DeviceLabel::new(rows::text(row, "label")?).map_err(RepoError::serialization)?,
            // Unknown names load as `Unrecognized`; the checker reports them.
            connector_type: ConnectorType::from(rows::text(row, "connector_type")?),
            gender: rows::parsed(row, "gender")?,
            direction: rows::parsed(row, "direction")?,
            signal_type: rows::parsed(row, "signal_type")?,
            created_at: rows::timestamp(row, "created_at")?,
            updated_at: rows::timestamp(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl PortRepo for SqlitePortRepo {
    async fn get(&self, id: PortId) -> Result<Option<DeviceIo>, RepoError> {
        let row = sqlx::query("SELECT * FROM device_ios WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("port.get", e))?;
        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list(&self, device_id: Option<DeviceId>) -> Result<Vec<DeviceIo>, RepoError> {
        let query = match device_id {
            Some(device_id) => sqlx::query(
                "SELECT * FROM device_ios WHERE device_id = ? ORDER BY created_at, rowid",
            )
            .bind(device_id.to_string()),
            None => sqlx::query("SELECT * FROM device_ios ORDER BY created_at, rowid"),
        };
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("port.list", e))?;
        rows.iter().map(Self::from_row).collect()
    }

    async fn save(&self, port: &DeviceIo) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO device_ios
                (id, device_id, label, connector_type, gender, direction, signal_type, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                label = excluded.label,
                connector_type = excluded.connector_type,
                gender = excluded.gender,
                direction = excluded.direction,
                signal_type = excluded.signal_type,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(port.id.to_string())
        .bind(port.device_id.to_string())
        .bind(port.label.as_str())
        .bind(port.connector_type.as_str())
        .bind(port.gender.as_str())
        .bind(port.direction.as_str())
        .bind(port.signal_type.as_str())
        .bind(port.created_at.to_rfc3339())
        .bind(port.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| rows::write_error("port.save", e))?;

        tracing::debug!(port_id = %port.id, device_id = %port.device_id, "Saved port");
        Ok(())
    }

    async fn delete(&self, id: PortId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM device_ios WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("port.delete", e))?;
        Ok(result.rows_affected() > 0)
    }
}
