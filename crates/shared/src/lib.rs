//! Patchbay Protocol - Request and response bodies for the REST API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, uuid and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - use raw `uuid::Uuid` in DTOs
//! 4. **Strings for vocabulary** - enum-valued fields travel as display names
//!    and are parsed by the engine, so bad input is a 400, not a decode failure

pub mod requests;
pub mod responses;

pub use requests::{
    CheckConnectionData, CreateConnectionData, CreateDeviceData, CreateDeviceIoData,
    CreateDiagramData, CreateDiagramDeviceData, UpdateDeviceData, UpdateDeviceIoData,
    UpdateDiagramData, UpdateDiagramDeviceData,
};
pub use responses::{
    CatalogOptionsData, CompatibilityReport, ConnectionData, DeviceData, DeviceIoData,
    DiagramData, DiagramDeviceData, OccupiedPortsData,
};
