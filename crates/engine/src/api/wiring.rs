//! Connection, compatibility and cable-list routes.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use patchbay_domain::{ConnectionId, DiagramId, PortId};
use patchbay_shared::{
    CheckConnectionData, CompatibilityReport, ConnectionData, CreateConnectionData,
    OccupiedPortsData,
};

use super::http::ApiError;
use crate::app::App;

pub(super) fn routes() -> Router<Arc<App>> {
    Router::new()
        .route(
            "/api/connections",
            get(list_connections).post(create_connection),
        )
        .route("/api/connections/check", post(check_connection))
        .route("/api/connections/{id}", delete(delete_connection))
        .route("/api/diagrams/{id}/occupied-ports", get(occupied_ports))
        .route("/api/diagrams/{id}/cable-list.csv", get(export_cable_list))
}

#[derive(Debug, Deserialize)]
struct ConnectionFilter {
    diagram_id: Option<Uuid>,
}

async fn list_connections(
    State(app): State<Arc<App>>,
    Query(filter): Query<ConnectionFilter>,
) -> Result<Json<Vec<ConnectionData>>, ApiError> {
    let connections = app
        .use_cases
        .wiring
        .queries
        .list(filter.diagram_id.map(DiagramId::from_uuid))
        .await?;
    Ok(Json(connections.iter().map(ConnectionData::from).collect()))
}

async fn create_connection(
    State(app): State<Arc<App>>,
    Json(data): Json<CreateConnectionData>,
) -> Result<(StatusCode, Json<ConnectionData>), ApiError> {
    let connection = app.use_cases.wiring.create.execute(data).await?;
    Ok((StatusCode::CREATED, Json(ConnectionData::from(&connection))))
}

async fn check_connection(
    State(app): State<Arc<App>>,
    Json(data): Json<CheckConnectionData>,
) -> Result<Json<CompatibilityReport>, ApiError> {
    let report = app
        .use_cases
        .wiring
        .check
        .execute(
            PortId::from_uuid(data.source_io_id),
            PortId::from_uuid(data.target_io_id),
        )
        .await?;
    Ok(Json(report))
}

async fn delete_connection(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .wiring
        .delete
        .execute(ConnectionId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn occupied_ports(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<OccupiedPortsData>, ApiError> {
    let occupied = app
        .use_cases
        .wiring
        .queries
        .occupied_ports(DiagramId::from_uuid(id))
        .await?;
    Ok(Json(OccupiedPortsData::new(id, &occupied)))
}

async fn export_cable_list(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let file = app
        .use_cases
        .export
        .execute(DiagramId::from_uuid(id))
        .await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        header_safe_file_name(&file.file_name)
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.csv,
    ))
}

/// Diagram names may hold quotes or control characters, neither of which
/// survives inside a quoted header parameter.
fn header_safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == '"' || c == '\\' || c.is_control() { '_' } else { c })
        .collect()
}
