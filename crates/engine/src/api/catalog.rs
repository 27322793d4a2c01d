//! Device catalog routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use patchbay_domain::{DeviceId, PortId};
use patchbay_shared::{
    CatalogOptionsData, CreateDeviceData, CreateDeviceIoData, DeviceData, DeviceIoData,
    UpdateDeviceData, UpdateDeviceIoData,
};

use super::http::ApiError;
use crate::app::App;

pub(super) fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/devices", get(list_devices).post(create_device))
        .route(
            "/api/devices/{id}",
            get(get_device).put(update_device).delete(delete_device),
        )
        .route("/api/device-ios", get(list_ports).post(create_port))
        .route(
            "/api/device-ios/{id}",
            get(get_port).put(update_port).delete(delete_port),
        )
        .route("/api/catalog/options", get(catalog_options))
}

// =============================================================================
// Devices
// =============================================================================

async fn list_devices(State(app): State<Arc<App>>) -> Result<Json<Vec<DeviceData>>, ApiError> {
    let devices = app.use_cases.catalog.devices.list().await?;
    Ok(Json(devices.iter().map(DeviceData::from).collect()))
}

async fn get_device(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeviceData>, ApiError> {
    let device = app
        .use_cases
        .catalog
        .devices
        .get(DeviceId::from_uuid(id))
        .await?;
    Ok(Json(DeviceData::from(&device)))
}

async fn create_device(
    State(app): State<Arc<App>>,
    Json(data): Json<CreateDeviceData>,
) -> Result<(StatusCode, Json<DeviceData>), ApiError> {
    let device = app.use_cases.catalog.devices.create(data).await?;
    Ok((StatusCode::CREATED, Json(DeviceData::from(&device))))
}

async fn update_device(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateDeviceData>,
) -> Result<Json<DeviceData>, ApiError> {
    let device = app
        .use_cases
        .catalog
        .devices
        .update(DeviceId::from_uuid(id), data)
        .await?;
    Ok(Json(DeviceData::from(&device)))
}

async fn delete_device(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .catalog
        .devices
        .delete(DeviceId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Ports
// =============================================================================

#[derive(Debug, Deserialize)]
struct PortFilter {
    device_id: Option<Uuid>,
}

async fn list_ports(
    State(app): State<Arc<App>>,
    Query(filter): Query<PortFilter>,
) -> Result<Json<Vec<DeviceIoData>>, ApiError> {
    let ports = app
        .use_cases
        .catalog
        .ports
        .list(filter.device_id.map(DeviceId::from_uuid))
        .await?;
    Ok(Json(ports.iter().map(DeviceIoData::from).collect()))
}

async fn get_port(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeviceIoData>, ApiError> {
    let port = app
        .use_cases
        .catalog
        .ports
        .get(PortId::from_uuid(id))
        .await?;
    Ok(Json(DeviceIoData::from(&port)))
}

async fn create_port(
    State(app): State<Arc<App>>,
    Json(data): Json<CreateDeviceIoData>,
) -> Result<(StatusCode, Json<DeviceIoData>), ApiError> {
    let port = app.use_cases.catalog.ports.create(data).await?;
    Ok((StatusCode::CREATED, Json(DeviceIoData::from(&port))))
}

async fn update_port(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateDeviceIoData>,
) -> Result<Json<DeviceIoData>, ApiError> {
    let port = app
        .use_cases
        .catalog
        .ports
        .update(PortId::from_uuid(id), data)
        .await?;
    Ok(Json(DeviceIoData::from(&port)))
}

async fn delete_port(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .catalog
        .ports
        .delete(PortId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn catalog_options() -> Json<CatalogOptionsData> {
    Json(CatalogOptionsData::current())
}
