//! Occupied-port tracker

use std::collections::BTreeSet;

use crate::entities::Connection;
use crate::PortId;

/// Ports already used as either end of a connection on one diagram
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupiedPorts(BTreeSet<PortId>);

impl OccupiedPorts {
    pub fn from_connections(connections: &[Connection]) -> Self {
        Self(
            connections
                .iter()
                .flat_map(Connection::endpoints)
                .collect(),
        )
    }

    pub fn is_occupied(&self, port: PortId) -> bool {
        self.0.contains(&port)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PortId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<PortId> for OccupiedPorts {
    fn from_iter<I: IntoIterator<Item = PortId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::NewConnection;
    use crate::{DiagramDeviceId, DiagramId};
    use chrono::Utc;

    fn connection(source: PortId, target: PortId) -> Connection {
        Connection::from_new(
            NewConnection {
                diagram_id: DiagramId::new(),
                source_diagram_device_id: DiagramDeviceId::new(),
                source_io_id: source,
                target_diagram_device_id: DiagramDeviceId::new(),
                target_io_id: target,
                cable_label: None,
                cable_length: None,
                notes: None,
            },
            Utc::now(),
        )
    }

    #[test]
    fn empty_list_occupies_nothing() {
        let occupied = OccupiedPorts::from_connections(&[]);
        assert!(occupied.is_empty());
    }

    #[test]
    fn both_endpoints_are_occupied() {
        let (a, b, c) = (PortId::new(), PortId::new(), PortId::new());
        let occupied = OccupiedPorts::from_connections(&[connection(a, b)]);
        assert!(occupied.is_occupied(a));
        assert!(occupied.is_occupied(b));
        assert!(!occupied.is_occupied(c));
    }

    #[test]
    fn at_most_two_ports_per_connection() {
        let shared = PortId::new();
        let connections: Vec<_> = (0..5).map(|_| connection(shared, PortId::new())).collect();
        let occupied = OccupiedPorts::from_connections(&connections);
        assert!(occupied.len() <= 2 * connections.len());
        assert_eq!(occupied.len(), 6);
    }
}
