//! Request bodies
//!
//! Update payloads are partial: absent fields are left unchanged.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Data for adding a device to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeviceData {
    pub brand: String,
    pub model: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDeviceData {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Data for adding a port to a catalog device.
///
/// Omitted gender, direction and signal type take the catalog defaults
/// (Female, Input, Video).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeviceIoData {
    pub device_id: Uuid,
    pub label: String,
    pub connector_type: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub signal_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDeviceIoData {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub connector_type: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub signal_type: Option<String>,
}

/// Data for creating a diagram
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDiagramData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDiagramData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
}

/// Data for placing a catalog device on a diagram
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDiagramDeviceData {
    pub diagram_id: Uuid,
    pub device_id: Uuid,
    pub position_x: f64,
    pub position_y: f64,
    #[serde(default)]
    pub rotation: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDiagramDeviceData {
    #[serde(default)]
    pub position_x: Option<f64>,
    #[serde(default)]
    pub position_y: Option<f64>,
    #[serde(default)]
    pub rotation: Option<f64>,
}

/// Data for creating a connection.
///
/// `notes` is accepted for compatibility with older clients but the server
/// always stores the derived cable note instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConnectionData {
    pub diagram_id: Uuid,
    pub source_diagram_device_id: Uuid,
    pub source_io_id: Uuid,
    pub target_diagram_device_id: Uuid,
    pub target_io_id: Uuid,
    #[serde(default)]
    pub cable_label: Option<String>,
    #[serde(default)]
    pub cable_length: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Ask whether two ports could be connected, without creating anything
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConnectionData {
    pub source_io_id: Uuid,
    pub target_io_id: Uuid,
}
