//! Table definitions

use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS devices (
        id TEXT PRIMARY KEY,
        brand TEXT NOT NULL,
        model TEXT NOT NULL,
        category TEXT NOT NULL,
        image_url TEXT,
        description TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS device_ios (
        id TEXT PRIMARY KEY,
        device_id TEXT NOT NULL REFERENCES devices(id) ON DELETE CASCADE,
        label TEXT NOT NULL,
        connector_type TEXT NOT NULL,
        gender TEXT NOT NULL,
        direction TEXT NOT NULL,
        signal_type TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_device_ios_device ON device_ios(device_id)",
    r#"
    CREATE TABLE IF NOT EXISTS diagrams (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        client_name TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS diagram_devices (
        id TEXT PRIMARY KEY,
        diagram_id TEXT NOT NULL REFERENCES diagrams(id) ON DELETE CASCADE,
        device_id TEXT NOT NULL REFERENCES devices(id) ON DELETE CASCADE,
        position_x REAL NOT NULL,
        position_y REAL NOT NULL,
        rotation REAL NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_diagram_devices_diagram ON diagram_devices(diagram_id)",
    r#"
    CREATE TABLE IF NOT EXISTS connections (
        id TEXT PRIMARY KEY,
        diagram_id TEXT NOT NULL REFERENCES diagrams(id) ON DELETE CASCADE,
        source_diagram_device_id TEXT NOT NULL REFERENCES diagram_devices(id) ON DELETE CASCADE,
        source_io_id TEXT NOT NULL REFERENCES device_ios(id) ON DELETE CASCADE,
        target_diagram_device_id TEXT NOT NULL REFERENCES diagram_devices(id) ON DELETE CASCADE,
        target_io_id TEXT NOT NULL REFERENCES device_ios(id) ON DELETE CASCADE,
        cable_label TEXT,
        cable_length TEXT,
        notes TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_connections_diagram ON connections(diagram_id)",
];

/// Create tables and indexes that do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    for statement in STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| RepoError::database("schema", e))?;
    }
    tracing::debug!(statements = STATEMENTS.len(), "Database schema ensured");
    Ok(())
}
