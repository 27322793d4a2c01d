//! Wiring use cases: compatibility checks and connection lifecycle.

mod check;
mod create;
mod delete;
mod queries;

use std::sync::Arc;

use patchbay_domain::{DiagramDeviceId, DiagramId, DraftError, PortId};

use crate::infrastructure::ports::RepoError;

pub use check::CheckConnection;
pub use create::CreateConnection;
pub use delete::DeleteConnection;
pub use queries::ConnectionQueries;

/// Container for wiring use cases.
pub struct WiringUseCases {
    pub check: Arc<CheckConnection>,
    pub create: Arc<CreateConnection>,
    pub delete: Arc<DeleteConnection>,
    pub queries: Arc<ConnectionQueries>,
}

impl WiringUseCases {
    pub fn new(
        check: Arc<CheckConnection>,
        create: Arc<CreateConnection>,
        delete: Arc<DeleteConnection>,
        queries: Arc<ConnectionQueries>,
    ) -> Self {
        Self {
            check,
            create,
            delete,
            queries,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WiringUseCaseError {
    #[error("Diagram not found: {0}")]
    DiagramNotFound(DiagramId),
    #[error("Diagram device not found: {0}")]
    PlacementNotFound(DiagramDeviceId),
    #[error("Port not found: {0}")]
    PortNotFound(PortId),
    #[error(transparent)]
    Draft(#[from] DraftError),
    /// Another connection claimed one of the ports between load and insert
    #[error("Port is already connected")]
    PortTaken,
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
