//! Device entity - A catalog entry for one piece of AV equipment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::DeviceCategory;
use crate::value_objects::{Description, DeviceLabel};
use crate::DeviceId;

/// A catalog device (brand + model), owner of a set of ports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub brand: DeviceLabel,
    pub model: DeviceLabel,
    pub category: DeviceCategory,
    /// Product photo, stored as a URL only
    pub image_url: Option<String>,
    pub description: Option<Description>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Device {
    pub fn new(
        brand: DeviceLabel,
        model: DeviceLabel,
        category: DeviceCategory,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DeviceId::new(),
            brand,
            model,
            category,
            image_url: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    /// `"<brand> <model>"`, the name used on diagrams and in the cable list
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
