//! Create a connection by replaying the authoring workflow server-side.

use std::sync::Arc;

use patchbay_domain::{
    Connection, ConnectionDraft, DiagramDevice, DiagramDeviceId, DiagramId, DraftError, DeviceIo,
    OccupiedPorts, PortId,
};
use patchbay_shared::CreateConnectionData;

use super::WiringUseCaseError;
use crate::infrastructure::ports::{
    ClockPort, ConnectionRepo, DiagramDeviceRepo, DiagramRepo, PortRepo,
};

pub struct CreateConnection {
    diagrams: Arc<dyn DiagramRepo>,
    placements: Arc<dyn DiagramDeviceRepo>,
    ports: Arc<dyn PortRepo>,
    connections: Arc<dyn ConnectionRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CreateConnection {
    pub fn new(
        diagrams: Arc<dyn DiagramRepo>,
        placements: Arc<dyn DiagramDeviceRepo>,
        ports: Arc<dyn PortRepo>,
        connections: Arc<dyn ConnectionRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            diagrams,
            placements,
            ports,
            connections,
            clock,
        }
    }

    /// Client-supplied notes are replaced by the derived cable note.
    pub async fn execute(
        &self,
        data: CreateConnectionData,
    ) -> Result<Connection, WiringUseCaseError> {
        let diagram_id = DiagramId::from_uuid(data.diagram_id);
        if self.diagrams.get(diagram_id).await?.is_none() {
            return Err(WiringUseCaseError::DiagramNotFound(diagram_id));
        }

        let source = self
            .placement(DiagramDeviceId::from_uuid(data.source_diagram_device_id))
            .await?;
        if source.diagram_id != diagram_id {
            return Err(DraftError::WrongDiagram(source.id).into());
        }
        let target = self
            .placement(DiagramDeviceId::from_uuid(data.target_diagram_device_id))
            .await?;
        let source_port = self.port(PortId::from_uuid(data.source_io_id)).await?;
        let target_port = self.port(PortId::from_uuid(data.target_io_id)).await?;

        let existing = self.connections.list(Some(diagram_id)).await?;
        let mut draft = ConnectionDraft::new(&source, OccupiedPorts::from_connections(&existing));
        draft.select_source_port(source_port)?;
        draft.select_target_device(&target)?;
        draft.select_target_port(target_port)?;
        if let Some(label) = data.cable_label {
            draft.set_cable_label(label);
        }
        if let Some(length) = data.cable_length {
            draft.set_cable_length(length);
        }

        let connection = Connection::from_new(draft.submission()?, self.clock.now());
        if !self.connections.insert_if_ports_free(&connection).await? {
            tracing::warn!(
                diagram_id = %diagram_id,
                source_io_id = %connection.source_io_id,
                target_io_id = %connection.target_io_id,
                "Connection lost a race for a port"
            );
            return Err(WiringUseCaseError::PortTaken);
        }

        tracing::info!(
            connection_id = %connection.id,
            diagram_id = %diagram_id,
            notes = connection.notes.as_deref().unwrap_or_default(),
            "Created connection"
        );
        Ok(connection)
    }

    async fn placement(&self, id: DiagramDeviceId) -> Result<DiagramDevice, WiringUseCaseError> {
        self.placements
            .get(id)
            .await?
            .ok_or(WiringUseCaseError::PlacementNotFound(id))
    }

    async fn port(&self, id: PortId) -> Result<DeviceIo, WiringUseCaseError> {
        self.ports
            .get(id)
            .await?
            .ok_or(WiringUseCaseError::PortNotFound(id))
    }
}
