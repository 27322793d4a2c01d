//! Repository port traits.
//!
//! `delete` returns whether a row existed so callers can answer 404 without a
//! second round trip.

use async_trait::async_trait;
use patchbay_domain::{
    Connection, ConnectionId, Device, DeviceId, DeviceIo, Diagram, DiagramDevice,
    DiagramDeviceId, DiagramId, PortId,
};

use super::RepoError;

/// Catalog devices.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceRepo: Send + Sync {
    async fn get(&self, id: DeviceId) -> Result<Option<Device>, RepoError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Device>, RepoError>;
    /// Insert or update in place. Never cascades.
    async fn save(&self, device: &Device) -> Result<(), RepoError>;
    /// Also removes the device's ports and every placement of it.
    async fn delete(&self, id: DeviceId) -> Result<bool, RepoError>;
}

/// Ports (device I/O) of catalog devices.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortRepo: Send + Sync {
    async fn get(&self, id: PortId) -> Result<Option<DeviceIo>, RepoError>;
    /// All ports, or only those of `device_id`.
    async fn list(&self, device_id: Option<DeviceId>) -> Result<Vec<DeviceIo>, RepoError>;
    async fn save(&self, port: &DeviceIo) -> Result<(), RepoError>;
    async fn delete(&self, id: PortId) -> Result<bool, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiagramRepo: Send + Sync {
    async fn get(&self, id: DiagramId) -> Result<Option<Diagram>, RepoError>;
    /// Most recently updated first.
    async fn list(&self) -> Result<Vec<Diagram>, RepoError>;
    async fn save(&self, diagram: &Diagram) -> Result<(), RepoError>;
    /// Also removes placements and connections.
    async fn delete(&self, id: DiagramId) -> Result<bool, RepoError>;
}

/// Devices placed on diagrams.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiagramDeviceRepo: Send + Sync {
    async fn get(&self, id: DiagramDeviceId) -> Result<Option<DiagramDevice>, RepoError>;
    async fn list(&self, diagram_id: Option<DiagramId>) -> Result<Vec<DiagramDevice>, RepoError>;
    async fn save(&self, placed: &DiagramDevice) -> Result<(), RepoError>;
    /// Also removes connections to or from the placement.
    async fn delete(&self, id: DiagramDeviceId) -> Result<bool, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRepo: Send + Sync {
    async fn get(&self, id: ConnectionId) -> Result<Option<Connection>, RepoError>;
    /// In creation order.
    async fn list(&self, diagram_id: Option<DiagramId>) -> Result<Vec<Connection>, RepoError>;
    /// Insert unless either port is already an endpoint on the same diagram.
    ///
    /// Returns `false` when the insert lost to an existing connection. The
    /// check and the insert are one statement.
    async fn insert_if_ports_free(&self, connection: &Connection) -> Result<bool, RepoError>;
    async fn delete(&self, id: ConnectionId) -> Result<bool, RepoError>;
}
