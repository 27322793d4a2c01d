//! Cable list export for one diagram.

use std::collections::HashMap;
use std::sync::Arc;

use patchbay_domain::{
    cable_list_file_name, render_csv, CableListRow, Device, DeviceId, DeviceIo,
    DiagramDevice, DiagramDeviceId, DiagramId, EndpointRecords, PortId,
};

use crate::infrastructure::ports::{
    ConnectionRepo, DeviceRepo, DiagramDeviceRepo, DiagramRepo, PortRepo, RepoError,
};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Diagram not found: {0}")]
    DiagramNotFound(DiagramId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Rendered cable list, ready to send as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CableListFile {
    pub file_name: String,
    pub csv: String,
    pub rows: usize,
}

pub struct ExportCableList {
    diagrams: Arc<dyn DiagramRepo>,
    placements: Arc<dyn DiagramDeviceRepo>,
    devices: Arc<dyn DeviceRepo>,
    ports: Arc<dyn PortRepo>,
    connections: Arc<dyn ConnectionRepo>,
}

impl ExportCableList {
    pub fn new(
        diagrams: Arc<dyn DiagramRepo>,
        placements: Arc<dyn DiagramDeviceRepo>,
        devices: Arc<dyn DeviceRepo>,
        ports: Arc<dyn PortRepo>,
        connections: Arc<dyn ConnectionRepo>,
    ) -> Self {
        Self {
            diagrams,
            placements,
            devices,
            ports,
            connections,
        }
    }

    /// One row per connection, in creation order.
    pub async fn execute(&self, diagram_id: DiagramId) -> Result<CableListFile, ExportError> {
        let diagram = self
            .diagrams
            .get(diagram_id)
            .await?
            .ok_or(ExportError::DiagramNotFound(diagram_id))?;

        let connections = self.connections.list(Some(diagram_id)).await?;
        let lookup = Lookup {
            placements: by_id(self.placements.list(Some(diagram_id)).await?, |p| p.id),
            devices: by_id(self.devices.list().await?, |d| d.id),
            ports: by_id(self.ports.list(None).await?, |p| p.id),
        };

        let rows: Vec<CableListRow> = connections
            .iter()
            .enumerate()
            .map(|(i, connection)| {
                CableListRow::new(
                    i + 1,
                    connection,
                    lookup.endpoint(connection.source_diagram_device_id, connection.source_io_id),
                    lookup.endpoint(connection.target_diagram_device_id, connection.target_io_id),
                )
            })
            .collect();

        tracing::info!(diagram_id = %diagram_id, rows = rows.len(), "Exported cable list");
        Ok(CableListFile {
            file_name: cable_list_file_name(Some(&diagram)),
            csv: render_csv(&rows),
            rows: rows.len(),
        })
    }
}

struct Lookup {
    placements: HashMap<DiagramDeviceId, DiagramDevice>,
    devices: HashMap<DeviceId, Device>,
    ports: HashMap<PortId, DeviceIo>,
}

impl Lookup {
    fn endpoint(&self, instance: DiagramDeviceId, port: PortId) -> EndpointRecords<'_> {
        EndpointRecords {
            device: self
                .placements
                .get(&instance)
                .and_then(|placed| self.devices.get(&placed.device_id)),
            port: self.ports.get(&port),
        }
    }
}

fn by_id<K, V>(values: Vec<V>, key: impl Fn(&V) -> K) -> HashMap<K, V>
where
    K: std::hash::Hash + Eq,
{
    values.into_iter().map(|v| (key(&v), v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockConnectionRepo, MockDeviceRepo, MockDiagramDeviceRepo, MockDiagramRepo, MockPortRepo,
    };
    use chrono::Utc;
    use patchbay_domain::{
        cable_note, derive_cable, Connection, ConnectorType, DeviceCategory, DeviceLabel, Diagram,
        DiagramName, Direction, Gender, NewConnection,
    };

    fn connection(
        diagram_id: DiagramId,
        from: (&DiagramDevice, &DeviceIo),
        to: (&DiagramDevice, &DeviceIo),
    ) -> Connection {
        Connection::from_new(
            NewConnection {
                diagram_id,
                source_diagram_device_id: from.0.id,
                source_io_id: from.1.id,
                target_diagram_device_id: to.0.id,
                target_io_id: to.1.id,
                cable_label: None,
                cable_length: Some("10ft".into()),
                notes: Some(cable_note(&derive_cable(from.1, to.1))),
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn when_exporting_then_rows_resolve_catalog_names() {
        let now = Utc::now();
        let diagram = Diagram::new(DiagramName::new("Jones Theater").unwrap(), now);
        let diagram_id = diagram.id;
        let amp = Device::new(
            DeviceLabel::new("Crown").unwrap(),
            DeviceLabel::new("XLS 1502").unwrap(),
            DeviceCategory::Amplifier,
            now,
        );
        let speaker = Device::new(
            DeviceLabel::new("Klipsch").unwrap(),
            DeviceLabel::new("R-51M").unwrap(),
            DeviceCategory::Speaker,
            now,
        );
        let amp_out = DeviceIo::new(
            amp.id,
            DeviceLabel::new("Ch A").unwrap(),
            ConnectorType::SpeakerWire,
            now,
        )
        .with_gender(Gender::NotApplicable)
        .with_direction(Direction::Output);
        let spk_in = DeviceIo::new(
            speaker.id,
            DeviceLabel::new("Terminals").unwrap(),
            ConnectorType::SpeakerWire,
            now,
        )
        .with_gender(Gender::NotApplicable);
        let amp_placed = DiagramDevice::new(diagram_id, amp.id, 0.0, 0.0, now);
        let spk_placed = DiagramDevice::new(diagram_id, speaker.id, 200.0, 0.0, now);
        let wire = connection(diagram_id, (&amp_placed, &amp_out), (&spk_placed, &spk_in));

        let mut diagrams = MockDiagramRepo::new();
        diagrams
            .expect_get()
            .returning(move |_| Ok(Some(diagram.clone())));
        let mut placements = MockDiagramDeviceRepo::new();
        placements
            .expect_list()
            .returning(move |_| Ok(vec![amp_placed.clone(), spk_placed.clone()]));
        let mut devices = MockDeviceRepo::new();
        devices
            .expect_list()
            .returning(move || Ok(vec![amp.clone(), speaker.clone()]));
        let mut ports = MockPortRepo::new();
        ports
            .expect_list()
            .returning(move |_| Ok(vec![amp_out.clone(), spk_in.clone()]));
        let mut connections = MockConnectionRepo::new();
        connections
            .expect_list()
            .returning(move |_| Ok(vec![wire.clone()]));

        let export = ExportCableList::new(
            Arc::new(diagrams),
            Arc::new(placements),
            Arc::new(devices),
            Arc::new(ports),
            Arc::new(connections),
        );
        let file = export.execute(diagram_id).await.unwrap();

        assert_eq!(file.file_name, "Jones Theater_cable_list.csv");
        assert_eq!(file.rows, 1);
        let lines: Vec<&str> = file.csv.lines().collect();
        assert_eq!(
            lines[1],
            "1,\"Cable 1\",\"Crown XLS 1502\",\"Ch A (Speaker Wire N/A)\",\"Klipsch R-51M\",\
             \"Terminals (Speaker Wire N/A)\",\"Speaker Wire Standard Cable\",\"10ft\",\
             \"Cable needed: Speaker Wire Standard Cable\""
        );
    }

    #[tokio::test]
    async fn when_catalog_records_are_gone_then_row_says_unknown() {
        let now = Utc::now();
        let diagram = Diagram::new(DiagramName::new("Orphans").unwrap(), now);
        let diagram_id = diagram.id;
        let ghost_device = DeviceId::new();
        let a = DiagramDevice::new(diagram_id, ghost_device, 0.0, 0.0, now);
        let b = DiagramDevice::new(diagram_id, ghost_device, 0.0, 0.0, now);
        let port = DeviceIo::new(
            ghost_device,
            DeviceLabel::new("X").unwrap(),
            ConnectorType::Rj45,
            now,
        );
        let wire = connection(diagram_id, (&a, &port), (&b, &port));

        let mut diagrams = MockDiagramRepo::new();
        diagrams
            .expect_get()
            .returning(move |_| Ok(Some(diagram.clone())));
        let mut placements = MockDiagramDeviceRepo::new();
        placements.expect_list().returning(|_| Ok(Vec::new()));
        let mut devices = MockDeviceRepo::new();
        devices.expect_list().returning(|| Ok(Vec::new()));
        let mut ports = MockPortRepo::new();
        ports.expect_list().returning(|_| Ok(Vec::new()));
        let mut connections = MockConnectionRepo::new();
        connections
            .expect_list()
            .returning(move |_| Ok(vec![wire.clone()]));

        let export = ExportCableList::new(
            Arc::new(diagrams),
            Arc::new(placements),
            Arc::new(devices),
            Arc::new(ports),
            Arc::new(connections),
        );
        let file = export.execute(diagram_id).await.unwrap();

        let row = file.csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "1,\"Cable 1\",\"Unknown\",\"Unknown\",\"Unknown\",\"Unknown\",\
             \"RJ45 Male-Male Cable\",\"10ft\",\"Cable needed: RJ45 Male-Male Cable\""
        );
    }

    #[tokio::test]
    async fn when_diagram_is_missing_then_not_found() {
        let mut diagrams = MockDiagramRepo::new();
        diagrams.expect_get().returning(|_| Ok(None));

        let export = ExportCableList::new(
            Arc::new(diagrams),
            Arc::new(MockDiagramDeviceRepo::new()),
            Arc::new(MockDeviceRepo::new()),
            Arc::new(MockPortRepo::new()),
            Arc::new(MockConnectionRepo::new()),
        );
        assert!(matches!(
            export.execute(DiagramId::new()).await,
            Err(ExportError::DiagramNotFound(_))
        ));
    }
}
