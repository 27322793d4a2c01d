//! # Patchbay Domain
//!
//! Catalog and diagram entities plus the wiring engine: which ports may be
//! cabled together, which cable that takes, and which ports are already in
//! use. Everything here is synchronous and free of I/O.

pub mod cable_list;
pub mod entities;
pub mod error;
pub mod ids;
pub mod types;
pub mod value_objects;
pub mod wiring;

pub use cable_list::{cable_list_file_name, render_csv, CableListRow, EndpointRecords};
pub use entities::{Connection, Device, DeviceIo, Diagram, DiagramDevice, NewConnection};
pub use error::DomainError;
pub use ids::{ConnectionId, DeviceId, DiagramDeviceId, DiagramId, PortId};
pub use types::{ConnectorType, DeviceCategory, Direction, Gender, SignalType};
pub use value_objects::{Description, DeviceLabel, DiagramName};
pub use wiring::{
    cable_note, cable_type_from_notes, check, derive_cable, CableConfig, CableSpec,
    Compatibility, CompatibilityReport, ConnectionDraft, DraftError, DraftStep, Incompatibility,
    OccupiedPorts, WiringError,
};
