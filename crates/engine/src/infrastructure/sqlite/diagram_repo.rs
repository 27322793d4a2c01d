//! SQLite-backed diagrams.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;

use patchbay_domain::{Description, Diagram, DiagramId, DiagramName};

use super::rows;
use crate::infrastructure::ports::{DiagramRepo, RepoError};

pub struct SqliteDiagramRepo {
    pool: SqlitePool,
}

impl SqliteDiagramRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: &SqliteRow) -> Result<Diagram, RepoError> {
        let description = rows::optional_text(row, "description")?
            .map(Description::new)
            .transpose()
            .map_err(RepoError::serialization)?;

        Ok(Diagram {
            id: rows::id(row, "id")?,
            name: DiagramName::new(rows::text(row, "name")?).map_err(RepoError::serialization)?,
            description,
            client_name: rows::optional_text(row, "client_name")?,
            created_at: rows::timestamp(row, "created_at")?,
            updated_at: rows::timestamp(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl DiagramRepo for SqliteDiagramRepo {
    async fn get(&self, id: DiagramId) -> Result<Option<Diagram>, RepoError> {
        let row = sqlx::query("SELECT * FROM diagrams WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("diagram.get", e))?;
        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Diagram>, RepoError> {
        let rows = sqlx::query("SELECT * FROM diagrams ORDER BY updated_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("diagram.list", e))?;
        rows.iter().map(Self::from_row).collect()
    }

    async fn save(&self, diagram: &Diagram) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO diagrams (id, name, description, client_name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                client_name = excluded.client_name,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(diagram.id.to_string())
        .bind(diagram.name.as_str())
        .bind(diagram.description.as_ref().map(|d| d.as_str()))
        .bind(diagram.client_name.as_deref())
        .bind(diagram.created_at.to_rfc3339())
        .bind(diagram.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| rows::write_error("diagram.save", e))?;

        tracing::debug!(diagram_id = %diagram.id, "Saved diagram");
        Ok(())
    }

    async fn delete(&self, id: DiagramId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM diagrams WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("diagram.delete", e))?;
        Ok(result.rows_affected() > 0)
    }
}
