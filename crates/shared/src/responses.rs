//! Response bodies
//!
//! Field names follow the existing REST contract: snake_case, timestamps as
//! `created_date` / `updated_date` in RFC 3339.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use patchbay_domain::{
    Connection, ConnectorType, Device, DeviceCategory, DeviceIo, Diagram, DiagramDevice,
    Direction, Gender, OccupiedPorts, SignalType,
};

// Re-export the wiring report; it is already a flat, serializable view
pub use patchbay_domain::CompatibilityReport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceData {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub category: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub created_date: String,
    pub updated_date: String,
}

impl From<&Device> for DeviceData {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id.to_uuid(),
            brand: device.brand.to_string(),
            model: device.model.to_string(),
            category: device.category.to_string(),
            image_url: device.image_url.clone(),
            description: device.description.as_ref().map(ToString::to_string),
            created_date: device.created_at.to_rfc3339(),
            updated_date: device.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceIoData {
    pub id: Uuid,
    pub device_id: Uuid,
    pub label: String,
    pub connector_type: String,
    pub gender: String,
    pub direction: String,
    pub signal_type: String,
    pub created_date: String,
    pub updated_date: String,
}

impl From<&DeviceIo> for DeviceIoData {
    fn from(port: &DeviceIo) -> Self {
        Self {
            id: port.id.to_uuid(),
            device_id: port.device_id.to_uuid(),
            label: port.label.to_string(),
            connector_type: port.connector_type.to_string(),
            gender: port.gender.to_string(),
            direction: port.direction.to_string(),
            signal_type: port.signal_type.to_string(),
            created_date: port.created_at.to_rfc3339(),
            updated_date: port.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramData {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub created_date: String,
    pub updated_date: String,
}

impl From<&Diagram> for DiagramData {
    fn from(diagram: &Diagram) -> Self {
        Self {
            id: diagram.id.to_uuid(),
            name: diagram.name.to_string(),
            description: diagram.description.as_ref().map(ToString::to_string),
            client_name: diagram.client_name.clone(),
            created_date: diagram.created_at.to_rfc3339(),
            updated_date: diagram.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramDeviceData {
    pub id: Uuid,
    pub diagram_id: Uuid,
    pub device_id: Uuid,
    pub position_x: f64,
    pub position_y: f64,
    pub rotation: f64,
    pub created_date: String,
    pub updated_date: String,
}

impl From<&DiagramDevice> for DiagramDeviceData {
    fn from(placed: &DiagramDevice) -> Self {
        Self {
            id: placed.id.to_uuid(),
            diagram_id: placed.diagram_id.to_uuid(),
            device_id: placed.device_id.to_uuid(),
            position_x: placed.position_x,
            position_y: placed.position_y,
            rotation: placed.rotation,
            created_date: placed.created_at.to_rfc3339(),
            updated_date: placed.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionData {
    pub id: Uuid,
    pub diagram_id: Uuid,
    pub source_diagram_device_id: Uuid,
    pub source_io_id: Uuid,
    pub target_diagram_device_id: Uuid,
    pub target_io_id: Uuid,
    pub cable_label: Option<String>,
    pub cable_length: Option<String>,
    pub notes: Option<String>,
    pub created_date: String,
    pub updated_date: String,
}

impl From<&Connection> for ConnectionData {
    fn from(conn: &Connection) -> Self {
        Self {
            id: conn.id.to_uuid(),
            diagram_id: conn.diagram_id.to_uuid(),
            source_diagram_device_id: conn.source_diagram_device_id.to_uuid(),
            source_io_id: conn.source_io_id.to_uuid(),
            target_diagram_device_id: conn.target_diagram_device_id.to_uuid(),
            target_io_id: conn.target_io_id.to_uuid(),
            cable_label: conn.cable_label.clone(),
            cable_length: conn.cable_length.clone(),
            notes: conn.notes.clone(),
            created_date: conn.created_at.to_rfc3339(),
            updated_date: conn.updated_at.to_rfc3339(),
        }
    }
}

/// Ports already used on a diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedPortsData {
    pub diagram_id: Uuid,
    pub port_ids: Vec<Uuid>,
}

impl OccupiedPortsData {
    pub fn new(diagram_id: Uuid, occupied: &OccupiedPorts) -> Self {
        Self {
            diagram_id,
            port_ids: occupied.iter().map(|id| id.to_uuid()).collect(),
        }
    }
}

/// Values for the catalog form dropdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOptionsData {
    pub connector_types: Vec<String>,
    pub genders: Vec<String>,
    pub directions: Vec<String>,
    pub signal_types: Vec<String>,
    pub categories: Vec<String>,
}

impl CatalogOptionsData {
    pub fn current() -> Self {
        fn names<T: ToString>(all: &[T]) -> Vec<String> {
            all.iter().map(ToString::to_string).collect()
        }
        Self {
            connector_types: names(ConnectorType::all()),
            genders: names(Gender::all()),
            directions: names(Direction::all()),
            signal_types: names(SignalType::all()),
            categories: names(DeviceCategory::all()),
        }
    }
}
