//! DeviceIo entity - One physical port on a catalog device

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ConnectorType, Direction, Gender, SignalType};
use crate::value_objects::DeviceLabel;
use crate::{DeviceId, PortId};

/// A port: the unit the wiring checker reasons about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceIo {
    pub id: PortId,
    pub device_id: DeviceId,
    pub label: DeviceLabel,
    pub connector_type: ConnectorType,
    pub gender: Gender,
    pub direction: Direction,
    pub signal_type: SignalType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeviceIo {
    /// New port with the catalog form defaults (Female, Input, Video)
    pub fn new(
        device_id: DeviceId,
        label: DeviceLabel,
        connector_type: ConnectorType,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: PortId::new(),
            device_id,
            label,
            connector_type,
            gender: Gender::default(),
            direction: Direction::default(),
            signal_type: SignalType::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_signal_type(mut self, signal_type: SignalType) -> Self {
        self.signal_type = signal_type;
        self
    }

    /// `"<label> (<connector> <gender>)"`
    pub fn describe(&self) -> String {
        format!("{} ({} {})", self.label, self.connector_type, self.gender)
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
