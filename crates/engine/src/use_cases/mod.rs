//! Use cases - User story orchestration across repositories.
//!
//! Each submodule owns its error type; the HTTP layer maps those to status codes.

pub mod catalog;
pub mod diagrams;
pub mod export;
pub mod wiring;

pub use catalog::{CatalogError, CatalogUseCases, DeviceCrud, PortCrud};
pub use diagrams::{DiagramCrud, DiagramError, DiagramUseCases, PlacementCrud};
pub use export::{CableListFile, ExportCableList, ExportError};
pub use wiring::{
    CheckConnection, ConnectionQueries, CreateConnection, DeleteConnection, WiringUseCaseError,
    WiringUseCases,
};

/// Trim an optional free-text field; blank means "none".
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
