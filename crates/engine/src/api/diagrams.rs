//! Diagram and placed-device routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use patchbay_domain::{DiagramDeviceId, DiagramId};
use patchbay_shared::{
    CreateDiagramData, CreateDiagramDeviceData, DiagramData, DiagramDeviceData, UpdateDiagramData,
    UpdateDiagramDeviceData,
};

use super::http::ApiError;
use crate::app::App;

pub(super) fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/diagrams", get(list_diagrams).post(create_diagram))
        .route(
            "/api/diagrams/{id}",
            get(get_diagram).put(update_diagram).delete(delete_diagram),
        )
        .route(
            "/api/diagram-devices",
            get(list_placements).post(place_device),
        )
        .route(
            "/api/diagram-devices/{id}",
            get(get_placement)
                .put(update_placement)
                .delete(remove_placement),
        )
}

async fn list_diagrams(State(app): State<Arc<App>>) -> Result<Json<Vec<DiagramData>>, ApiError> {
    let diagrams = app.use_cases.diagrams.diagrams.list().await?;
    Ok(Json(diagrams.iter().map(DiagramData::from).collect()))
}

async fn get_diagram(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DiagramData>, ApiError> {
    let diagram = app
        .use_cases
        .diagrams
        .diagrams
        .get(DiagramId::from_uuid(id))
        .await?;
    Ok(Json(DiagramData::from(&diagram)))
}

async fn create_diagram(
    State(app): State<Arc<App>>,
    Json(data): Json<CreateDiagramData>,
) -> Result<(StatusCode, Json<DiagramData>), ApiError> {
    let diagram = app.use_cases.diagrams.diagrams.create(data).await?;
    Ok((StatusCode::CREATED, Json(DiagramData::from(&diagram))))
}

async fn update_diagram(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateDiagramData>,
) -> Result<Json<DiagramData>, ApiError> {
    let diagram = app
        .use_cases
        .diagrams
        .diagrams
        .update(DiagramId::from_uuid(id), data)
        .await?;
    Ok(Json(DiagramData::from(&diagram)))
}

async fn delete_diagram(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .diagrams
        .diagrams
        .delete(DiagramId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Placed devices
// =============================================================================

#[derive(Debug, Deserialize)]
struct DiagramFilter {
    diagram_id: Option<Uuid>,
}

async fn list_placements(
    State(app): State<Arc<App>>,
    Query(filter): Query<DiagramFilter>,
) -> Result<Json<Vec<DiagramDeviceData>>, ApiError> {
    let placed = app
        .use_cases
        .diagrams
        .placements
        .list(filter.diagram_id.map(DiagramId::from_uuid))
        .await?;
    Ok(Json(placed.iter().map(DiagramDeviceData::from).collect()))
}

async fn get_placement(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DiagramDeviceData>, ApiError> {
    let placed = app
        .use_cases
        .diagrams
        .placements
        .get(DiagramDeviceId::from_uuid(id))
        .await?;
    Ok(Json(DiagramDeviceData::from(&placed)))
}

async fn place_device(
    State(app): State<Arc<App>>,
    Json(data): Json<CreateDiagramDeviceData>,
) -> Result<(StatusCode, Json<DiagramDeviceData>), ApiError> {
    let placed = app.use_cases.diagrams.placements.place(data).await?;
    Ok((StatusCode::CREATED, Json(DiagramDeviceData::from(&placed))))
}

async fn update_placement(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateDiagramDeviceData>,
) -> Result<Json<DiagramDeviceData>, ApiError> {
    let placed = app
        .use_cases
        .diagrams
        .placements
        .update(DiagramDeviceId::from_uuid(id), data)
        .await?;
    Ok(Json(DiagramDeviceData::from(&placed)))
}

async fn remove_placement(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .diagrams
        .placements
        .remove(DiagramDeviceId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
