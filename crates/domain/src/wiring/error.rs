//! Wiring errors

use thiserror::Error;

use crate::{DiagramDeviceId, PortId};

/// A port references data the compatibility table does not know about.
///
/// This is a catalog problem, not a user mistake, and is kept apart from
/// [`Incompatibility`](super::Incompatibility).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    #[error("Unknown connector type: {0}")]
    UnknownConnectorType(String),
}

/// Rejected step in the connection authoring workflow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Select a source port first")]
    NoSourcePort,

    #[error("Select a target device first")]
    NoTargetDevice,

    #[error("Target device must be a different device than the source")]
    SameDevice,

    #[error("Device {0} is not placed on this diagram")]
    WrongDiagram(DiagramDeviceId),

    #[error("Port {0} does not belong to the selected device")]
    PortNotOnDevice(PortId),

    #[error("Port {0} is already connected")]
    PortOccupied(PortId),

    #[error("Connection is not ready: select a source port, target device and target port")]
    Incomplete,

    #[error("{0}")]
    Incompatible(String),

    #[error(transparent)]
    Wiring(#[from] WiringError),
}
