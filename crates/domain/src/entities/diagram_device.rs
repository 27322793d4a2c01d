//! DiagramDevice entity - A catalog device placed on a diagram canvas
//!
//! The same catalog device may be placed several times on one diagram; each
//! placement is its own instance and connections reference the instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DeviceId, DiagramDeviceId, DiagramId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramDevice {
    pub id: DiagramDeviceId,
    pub diagram_id: DiagramId,
    pub device_id: DeviceId,
    pub position_x: f64,
    pub position_y: f64,
    /// Degrees, 0 when placed
    pub rotation: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DiagramDevice {
    pub fn new(
        diagram_id: DiagramId,
        device_id: DeviceId,
        position_x: f64,
        position_y: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DiagramDeviceId::new(),
            diagram_id,
            device_id,
            position_x,
            position_y,
            rotation: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn move_to(&mut self, position_x: f64, position_y: f64, now: DateTime<Utc>) {
        self.position_x = position_x;
        self.position_y = position_y;
        self.updated_at = now;
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
