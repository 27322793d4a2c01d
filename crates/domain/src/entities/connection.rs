//! Connection entity - A cable run between two placed device ports

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ConnectionId, DiagramDeviceId, DiagramId, PortId};

/// A persisted connection.
///
/// Validity is established once, when the connection is authored; existing
/// connections are never re-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub diagram_id: DiagramId,
    pub source_diagram_device_id: DiagramDeviceId,
    pub source_io_id: PortId,
    pub target_diagram_device_id: DiagramDeviceId,
    pub target_io_id: PortId,
    pub cable_label: Option<String>,
    pub cable_length: Option<String>,
    /// Carries the derived cable type as `"Cable needed: <cable>"`
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Connection {
    /// Materialize a creation payload with a fresh id.
    pub fn from_new(new: NewConnection, now: DateTime<Utc>) -> Self {
        Self {
            id: ConnectionId::new(),
            diagram_id: new.diagram_id,
            source_diagram_device_id: new.source_diagram_device_id,
            source_io_id: new.source_io_id,
            target_diagram_device_id: new.target_diagram_device_id,
            target_io_id: new.target_io_id,
            cable_label: new.cable_label,
            cable_length: new.cable_length,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// True if either endpoint sits on the given placed device.
    pub fn involves_device(&self, id: DiagramDeviceId) -> bool {
        self.source_diagram_device_id == id || self.target_diagram_device_id == id
    }

    /// True if either endpoint is the given port.
    pub fn involves_port(&self, id: PortId) -> bool {
        self.source_io_id == id || self.target_io_id == id
    }

    pub fn endpoints(&self) -> [PortId; 2] {
        [self.source_io_id, self.target_io_id]
    }
}

/// Payload for creating a connection: everything but identity and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConnection {
    pub diagram_id: DiagramId,
    pub source_diagram_device_id: DiagramDeviceId,
    pub source_io_id: PortId,
    pub target_diagram_device_id: DiagramDeviceId,
    pub target_io_id: PortId,
    pub cable_label: Option<String>,
    pub cable_length: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Connection {
        Connection::from_new(
            NewConnection {
                diagram_id: DiagramId::new(),
                source_diagram_device_id: DiagramDeviceId::new(),
                source_io_id: PortId::new(),
                target_diagram_device_id: DiagramDeviceId::new(),
                target_io_id: PortId::new(),
                cable_label: None,
                cable_length: None,
                notes: None,
            },
            Utc::now(),
        )
    }

    #[test]
    fn involves_checks_both_ends() {
        let conn = sample();
        assert!(conn.involves_port(conn.source_io_id));
        assert!(conn.involves_port(conn.target_io_id));
        assert!(!conn.involves_port(PortId::new()));
        assert!(conn.involves_device(conn.target_diagram_device_id));
        assert!(!conn.involves_device(DiagramDeviceId::new()));
    }
}
