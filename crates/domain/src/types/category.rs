//! Device categories for the catalog.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad product category of a catalog device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceCategory {
    #[default]
    Receiver,
    #[serde(rename = "HDMI Matrix")]
    HdmiMatrix,
    #[serde(rename = "Audio Extender")]
    AudioExtender,
    #[serde(rename = "Video Extender")]
    VideoExtender,
    #[serde(rename = "Savant Controller")]
    SavantController,
    Amplifier,
    Speaker,
    Display,
    #[serde(rename = "Source Device")]
    SourceDevice,
    Other,
}

impl DeviceCategory {
    /// Get all categories for UI dropdowns
    pub fn all() -> &'static [DeviceCategory] {
        &[
            DeviceCategory::Receiver,
            DeviceCategory::HdmiMatrix,
            DeviceCategory::AudioExtender,
            DeviceCategory::VideoExtender,
            DeviceCategory::SavantController,
            DeviceCategory::Amplifier,
            DeviceCategory::Speaker,
            DeviceCategory::Display,
            DeviceCategory::SourceDevice,
            DeviceCategory::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCategory::Receiver => "Receiver",
            DeviceCategory::HdmiMatrix => "HDMI Matrix",
            DeviceCategory::AudioExtender => "Audio Extender",
            DeviceCategory::VideoExtender => "Video Extender",
            DeviceCategory::SavantController => "Savant Controller",
            DeviceCategory::Amplifier => "Amplifier",
            DeviceCategory::Speaker => "Speaker",
            DeviceCategory::Display => "Display",
            DeviceCategory::SourceDevice => "Source Device",
            DeviceCategory::Other => "Other",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceCategory::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == s.trim())
            .ok_or_else(|| DomainError::parse(format!("Unknown device category: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&DeviceCategory::SavantController).unwrap();
        assert_eq!(json, "\"Savant Controller\"");
        let parsed: DeviceCategory = serde_json::from_str("\"HDMI Matrix\"").unwrap();
        assert_eq!(parsed, DeviceCategory::HdmiMatrix);
    }

    #[test]
    fn from_str_matches_display() {
        for category in DeviceCategory::all() {
            assert_eq!(category.to_string().parse::<DeviceCategory>().unwrap(), *category);
        }
        assert!("Toaster".parse::<DeviceCategory>().is_err());
    }
}
