//! Connection authoring workflow
//!
//! A draft starts from the device instance the user clicked on and walks
//! through source port, target device and target port. The compatibility
//! check re-runs whenever either port changes, and a [`NewConnection`] can
//! only be produced from a compatible pair.

use super::cable::cable_note;
use super::error::{DraftError, WiringError};
use super::occupancy::OccupiedPorts;
use super::rules::{check, Compatibility, CompatibilityReport};
use crate::entities::{DeviceIo, DiagramDevice, NewConnection};
use crate::{DeviceId, DiagramDeviceId, DiagramId};

/// Where the draft is in the authoring sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStep {
    Idle,
    SourceChosen,
    TargetDeviceChosen,
    ReadyForCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Endpoint {
    instance: DiagramDeviceId,
    device: DeviceId,
}

impl From<&DiagramDevice> for Endpoint {
    fn from(placed: &DiagramDevice) -> Self {
        Self {
            instance: placed.id,
            device: placed.device_id,
        }
    }
}

#[derive(Debug, Clone)]
enum Selection {
    Idle,
    SourceChosen {
        source_port: DeviceIo,
    },
    TargetDeviceChosen {
        source_port: DeviceIo,
        target: Endpoint,
    },
    ReadyForCheck {
        source_port: DeviceIo,
        target: Endpoint,
        target_port: DeviceIo,
        outcome: Result<Compatibility, WiringError>,
    },
}

/// In-progress connection from one placed device
#[derive(Debug, Clone)]
pub struct ConnectionDraft {
    diagram_id: DiagramId,
    source: Endpoint,
    occupied: OccupiedPorts,
    selection: Selection,
    cable_label: Option<String>,
    cable_length: Option<String>,
}

impl ConnectionDraft {
    /// Start a draft from `source`, against the diagram's current occupancy.
    pub fn new(source: &DiagramDevice, occupied: OccupiedPorts) -> Self {
        Self {
            diagram_id: source.diagram_id,
            source: Endpoint::from(source),
            occupied,
            selection: Selection::Idle,
            cable_label: None,
            cable_length: None,
        }
    }

    pub fn step(&self) -> DraftStep {
        match self.selection {
            Selection::Idle => DraftStep::Idle,
            Selection::SourceChosen { .. } => DraftStep::SourceChosen,
            Selection::TargetDeviceChosen { .. } => DraftStep::TargetDeviceChosen,
            Selection::ReadyForCheck { .. } => DraftStep::ReadyForCheck,
        }
    }

    pub fn diagram_id(&self) -> DiagramId {
        self.diagram_id
    }

    pub fn source_instance(&self) -> DiagramDeviceId {
        self.source.instance
    }

    /// Choose (or change) the port on the source device.
    ///
    /// Keeps any target selection and re-runs the check if a target port is set.
    pub fn select_source_port(&mut self, port: DeviceIo) -> Result<(), DraftError> {
        self.ensure_usable(&port, self.source.device)?;

        self.selection = match std::mem::replace(&mut self.selection, Selection::Idle) {
            Selection::Idle | Selection::SourceChosen { .. } => {
                Selection::SourceChosen { source_port: port }
            }
            Selection::TargetDeviceChosen { target, .. } => Selection::TargetDeviceChosen {
                source_port: port,
                target,
            },
            Selection::ReadyForCheck {
                target,
                target_port,
                ..
            } => {
                let outcome = check(&port, &target_port);
                Selection::ReadyForCheck {
                    source_port: port,
                    target,
                    target_port,
                    outcome,
                }
            }
        };
        Ok(())
    }

    /// Choose the device instance to connect to. Clears any target port.
    pub fn select_target_device(&mut self, target: &DiagramDevice) -> Result<(), DraftError> {
        if target.diagram_id != self.diagram_id {
            return Err(DraftError::WrongDiagram(target.id));
        }
        if target.id == self.source.instance {
            return Err(DraftError::SameDevice);
        }

        let source_port = match std::mem::replace(&mut self.selection, Selection::Idle) {
            Selection::Idle => return Err(DraftError::NoSourcePort),
            Selection::SourceChosen { source_port }
            | Selection::TargetDeviceChosen { source_port, .. }
            | Selection::ReadyForCheck { source_port, .. } => source_port,
        };
        self.selection = Selection::TargetDeviceChosen {
            source_port,
            target: Endpoint::from(target),
        };
        Ok(())
    }

    /// Choose (or change) the port on the target device and run the check.
    pub fn select_target_port(&mut self, port: DeviceIo) -> Result<(), DraftError> {
        let target = match &self.selection {
            Selection::Idle => return Err(DraftError::NoSourcePort),
            Selection::SourceChosen { .. } => return Err(DraftError::NoTargetDevice),
            Selection::TargetDeviceChosen { target, .. }
            | Selection::ReadyForCheck { target, .. } => *target,
        };
        self.ensure_usable(&port, target.device)?;

        let source_port = match std::mem::replace(&mut self.selection, Selection::Idle) {
            Selection::TargetDeviceChosen { source_port, .. }
            | Selection::ReadyForCheck { source_port, .. } => source_port,
            other => {
                self.selection = other;
                return Err(DraftError::NoTargetDevice);
            }
        };
        let outcome = check(&source_port, &port);
        self.selection = Selection::ReadyForCheck {
            source_port,
            target,
            target_port: port,
            outcome,
        };
        Ok(())
    }

    pub fn set_cable_label(&mut self, label: impl Into<String>) {
        self.cable_label = non_blank(label.into());
    }

    pub fn set_cable_length(&mut self, length: impl Into<String>) {
        self.cable_length = non_blank(length.into());
    }

    /// Result of the latest check, once both ports are chosen
    pub fn report(&self) -> Option<CompatibilityReport> {
        match &self.selection {
            Selection::ReadyForCheck { outcome, .. } => Some(CompatibilityReport::from(outcome)),
            _ => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        matches!(
            &self.selection,
            Selection::ReadyForCheck {
                outcome: Ok(Compatibility::Compatible { .. }),
                ..
            }
        )
    }

    /// Build the creation payload. Notes carry the derived cable type.
    pub fn submission(&self) -> Result<NewConnection, DraftError> {
        let Selection::ReadyForCheck {
            source_port,
            target,
            target_port,
            outcome,
        } = &self.selection
        else {
            return Err(DraftError::Incomplete);
        };

        let cable = match outcome {
            Ok(Compatibility::Compatible { cable }) => cable,
            Ok(Compatibility::Incompatible(why)) => {
                return Err(DraftError::Incompatible(why.reason()))
            }
            Err(e) => return Err(DraftError::Wiring(e.clone())),
        };

        Ok(NewConnection {
            diagram_id: self.diagram_id,
            source_diagram_device_id: self.source.instance,
            source_io_id: source_port.id,
            target_diagram_device_id: target.instance,
            target_io_id: target_port.id,
            cable_label: self.cable_label.clone(),
            cable_length: self.cable_length.clone(),
            notes: Some(cable_note(cable)),
        })
    }

    /// Back to `Idle`, keeping the source device and occupancy snapshot
    pub fn reset(&mut self) {
        self.selection = Selection::Idle;
        self.cable_label = None;
        self.cable_length = None;
    }

    fn ensure_usable(&self, port: &DeviceIo, owner: DeviceId) -> Result<(), DraftError> {
        if port.device_id != owner {
            return Err(DraftError::PortNotOnDevice(port.id));
        }
        if self.occupied.is_occupied(port.id) {
            return Err(DraftError::PortOccupied(port.id));
        }
        Ok(())
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
