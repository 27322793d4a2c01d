//! SQLite-backed device catalog.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;

use patchbay_domain::{Description, Device, DeviceId, DeviceLabel};

use super::rows;
use crate::infrastructure::ports::{DeviceRepo, RepoError};

pub struct SqliteDeviceRepo {
    pool: SqlitePool,
}

impl SqliteDeviceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: &SqliteRow) -> Result<Device, RepoError> {
        let description = rows::optional_text(row, "description")?
            .map(Description::new)
            .transpose()
            .map_err(RepoError::serialization)?;

        Ok(Device {
            id: rows::id(row, "id")?,
            brand: DeviceLabel::new(rows::text(row, "brand")?).map_err(RepoError::serialization)?,
            model: DeviceLabel::new(rows::text(row, "model")?).map_err(RepoError::serialization)?,
            category: rows::parsed(row, "category")?,
            image_url: rows::optional_text(row, "image_url")?,
            description,
            created_at: rows::timestamp(row, "created_at")?,
            updated_at: rows::timestamp(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl DeviceRepo for SqliteDeviceRepo {
    async fn get(&self, id: DeviceId) -> Result<Option<Device>, RepoError> {
        let row = sqlx::query("SELECT * FROM devices WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("device.get", e))?;
        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Device>, RepoError> {
        let rows = sqlx::query("SELECT * FROM devices ORDER BY created_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("device.list", e))?;
        rows.iter().map(Self::from_row).collect()
    }

    async fn save(&self, device: &Device) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO devices (id, brand, model, category, image_url, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                brand = excluded.brand,
                model = excluded.model,
                category = excluded.category,
                image_url = excluded.image_url,
                description = excluded.description,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(device.id.to_string())
        .bind(device.brand.as_str())
        .bind(device.model.as_str())
        .bind(device.category.as_str())
        .bind(device.image_url.as_deref())
        .bind(device.description.as_ref().map(|d| d.as_str()))
        .bind(device.created_at.to_rfc3339())
        .bind(device.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| rows::write_error("device.save", e))?;

        tracing::debug!(device_id = %device.id, "Saved device");
        Ok(())
    }

    async fn delete(&self, id: DeviceId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM devices WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("device.delete", e))?;
        Ok(result.rows_affected() > 0)
    }
}
