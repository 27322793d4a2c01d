use std::sync::Arc;

use patchbay_domain::{Connection, DiagramId, OccupiedPorts};

use super::WiringUseCaseError;
use crate::infrastructure::ports::{ConnectionRepo, DiagramRepo};

/// Read side of connections: listings and the occupied-port snapshot.
pub struct ConnectionQueries {
    diagrams: Arc<dyn DiagramRepo>,
    connections: Arc<dyn ConnectionRepo>,
}

impl ConnectionQueries {
    pub fn new(diagrams: Arc<dyn DiagramRepo>, connections: Arc<dyn ConnectionRepo>) -> Self {
        Self {
            diagrams,
            connections,
        }
    }

    pub async fn list(
        &self,
        diagram_id: Option<DiagramId>,
    ) -> Result<Vec<Connection>, WiringUseCaseError> {
        Ok(self.connections.list(diagram_id).await?)
    }

    /// Ports that already carry a connection on this diagram.
    pub async fn occupied_ports(
        &self,
        diagram_id: DiagramId,
    ) -> Result<OccupiedPorts, WiringUseCaseError> {
        if self.diagrams.get(diagram_id).await?.is_none() {
            return Err(WiringUseCaseError::DiagramNotFound(diagram_id));
        }
        let connections = self.connections.list(Some(diagram_id)).await?;
        Ok(OccupiedPorts::from_connections(&connections))
    }
}
