//! HTTP routes and error mapping.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;

use patchbay_domain::DraftError;

use crate::app::App;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::{CatalogError, DiagramError, ExportError, WiringUseCaseError};

use super::{catalog, diagrams, wiring};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .merge(catalog::routes())
        .merge(diagrams::routes())
        .merge(wiring::routes())
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::ConstraintViolation(_) => ApiError::Conflict(e.to_string()),
            RepoError::Database { .. } | RepoError::Serialization(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::DeviceNotFound(_) | CatalogError::PortNotFound(_) => {
                ApiError::NotFound(e.to_string())
            }
            CatalogError::Domain(_) => ApiError::BadRequest(e.to_string()),
            CatalogError::Repo(e) => e.into(),
        }
    }
}

impl From<DiagramError> for ApiError {
    fn from(e: DiagramError) -> Self {
        match e {
            DiagramError::DiagramNotFound(_)
            | DiagramError::PlacementNotFound(_)
            | DiagramError::DeviceNotFound(_) => ApiError::NotFound(e.to_string()),
            DiagramError::Domain(_) => ApiError::BadRequest(e.to_string()),
            DiagramError::Repo(e) => e.into(),
        }
    }
}

impl From<WiringUseCaseError> for ApiError {
    fn from(e: WiringUseCaseError) -> Self {
        match e {
            WiringUseCaseError::DiagramNotFound(_)
            | WiringUseCaseError::PlacementNotFound(_)
            | WiringUseCaseError::PortNotFound(_) => ApiError::NotFound(e.to_string()),
            WiringUseCaseError::Draft(DraftError::PortOccupied(_))
            | WiringUseCaseError::PortTaken => ApiError::Conflict(e.to_string()),
            WiringUseCaseError::Draft(_) => ApiError::BadRequest(e.to_string()),
            WiringUseCaseError::Repo(e) => e.into(),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::DiagramNotFound(_) => ApiError::NotFound(e.to_string()),
            ExportError::Repo(e) => e.into(),
        }
    }
}
