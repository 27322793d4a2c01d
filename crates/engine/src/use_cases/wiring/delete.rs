use std::sync::Arc;

use patchbay_domain::ConnectionId;

use super::WiringUseCaseError;
use crate::infrastructure::ports::ConnectionRepo;

/// Remove a connection, freeing both of its ports.
///
/// Deleting an id that no longer exists is not an error.
pub struct DeleteConnection {
    connections: Arc<dyn ConnectionRepo>,
}

impl DeleteConnection {
    pub fn new(connections: Arc<dyn ConnectionRepo>) -> Self {
        Self { connections }
    }

    pub async fn execute(&self, id: ConnectionId) -> Result<(), WiringUseCaseError> {
        let Some(connection) = self.connections.get(id).await? else {
            tracing::debug!(connection_id = %id, "Connection already gone");
            return Ok(());
        };

        if self.connections.delete(id).await? {
            tracing::info!(
                connection_id = %id,
                diagram_id = %connection.diagram_id,
                source_io_id = %connection.source_io_id,
                target_io_id = %connection.target_io_id,
                "Deleted connection, ports freed"
            );
        }
        Ok(())
    }
}
