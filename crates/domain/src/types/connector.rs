//! Physical connector families and the mating table between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The physical interface family of a port.
///
/// Stored names that are not part of the catalog survive as
/// [`ConnectorType::Unrecognized`] so that a row written by an older or
/// foreign client can still be loaded; the wiring checker reports those as a
/// configuration error instead of an ordinary mismatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectorType {
    #[default]
    Hdmi,
    Rj45,
    RcaAudio,
    Xlr,
    OpticalToslink,
    CoaxialDigital,
    Db9,
    Db15,
    UsbA,
    UsbB,
    UsbC,
    Jack3_5mm,
    Jack1_4Inch,
    SpeakerWire,
    Bnc,
    ComponentVideo,
    CompositeVideo,
    SVideo,
    DisplayPort,
    Dvi,
    Cat6,
    FiberOptic,
    Dante,
    Other,
    /// A name outside the catalog, kept verbatim.
    Unrecognized(String),
}

impl ConnectorType {
    /// Every catalog connector type, in dropdown order.
    pub fn all() -> &'static [ConnectorType] {
        &[
            ConnectorType::Hdmi,
            ConnectorType::Rj45,
            ConnectorType::RcaAudio,
            ConnectorType::Xlr,
            ConnectorType::OpticalToslink,
            ConnectorType::CoaxialDigital,
            ConnectorType::Db9,
            ConnectorType::Db15,
            ConnectorType::UsbA,
            ConnectorType::UsbB,
            ConnectorType::UsbC,
            ConnectorType::Jack3_5mm,
            ConnectorType::Jack1_4Inch,
            ConnectorType::SpeakerWire,
            ConnectorType::Bnc,
            ConnectorType::ComponentVideo,
            ConnectorType::CompositeVideo,
            ConnectorType::SVideo,
            ConnectorType::DisplayPort,
            ConnectorType::Dvi,
            ConnectorType::Cat6,
            ConnectorType::FiberOptic,
            ConnectorType::Dante,
            ConnectorType::Other,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Hdmi => "HDMI",
            Self::Rj45 => "RJ45",
            Self::RcaAudio => "RCA Audio",
            Self::Xlr => "XLR",
            Self::OpticalToslink => "Optical Toslink",
            Self::CoaxialDigital => "Coaxial Digital",
            Self::Db9 => "DB9",
            Self::Db15 => "DB15",
            Self::UsbA => "USB-A",
            Self::UsbB => "USB-B",
            Self::UsbC => "USB-C",
            Self::Jack3_5mm => "3.5mm Jack",
            Self::Jack1_4Inch => "1/4 Inch Jack",
            Self::SpeakerWire => "Speaker Wire",
            Self::Bnc => "BNC",
            Self::ComponentVideo => "Component Video",
            Self::CompositeVideo => "Composite Video",
            Self::SVideo => "S-Video",
            Self::DisplayPort => "DisplayPort",
            Self::Dvi => "DVI",
            Self::Cat6 => "CAT6",
            Self::FiberOptic => "Fiber Optic",
            Self::Dante => "Dante",
            Self::Other => "Other",
            Self::Unrecognized(name) => name,
        }
    }

    /// The connector types this one may legally mate with.
    ///
    /// Every catalog type mates with itself; RJ45 and CAT6 additionally mate
    /// with each other. Returns `None` only for [`ConnectorType::Unrecognized`].
    pub fn compatible_with(&self) -> Option<&'static [ConnectorType]> {
        let set: &'static [ConnectorType] = match self {
            Self::Hdmi => &[Self::Hdmi],
            Self::Rj45 => &[Self::Rj45, Self::Cat6],
            Self::RcaAudio => &[Self::RcaAudio],
            Self::Xlr => &[Self::Xlr],
            Self::OpticalToslink => &[Self::OpticalToslink],
            Self::CoaxialDigital => &[Self::CoaxialDigital],
            Self::Db9 => &[Self::Db9],
            Self::Db15 => &[Self::Db15],
            Self::UsbA => &[Self::UsbA],
            Self::UsbB => &[Self::UsbB],
            Self::UsbC => &[Self::UsbC],
            Self::Jack3_5mm => &[Self::Jack3_5mm],
            Self::Jack1_4Inch => &[Self::Jack1_4Inch],
            Self::SpeakerWire => &[Self::SpeakerWire],
            Self::Bnc => &[Self::Bnc],
            Self::ComponentVideo => &[Self::ComponentVideo],
            Self::CompositeVideo => &[Self::CompositeVideo],
            Self::SVideo => &[Self::SVideo],
            Self::DisplayPort => &[Self::DisplayPort],
            Self::Dvi => &[Self::Dvi],
            Self::Cat6 => &[Self::Cat6, Self::Rj45],
            Self::FiberOptic => &[Self::FiberOptic],
            Self::Dante => &[Self::Dante],
            Self::Other => &[Self::Other],
            Self::Unrecognized(_) => return None,
        };
        Some(set)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectorType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::all()
            .iter()
            .find(|known| known.as_str() == s)
            .cloned()
            .unwrap_or_else(|| Self::Unrecognized(s.to_string())))
    }
}

impl From<String> for ConnectorType {
    fn from(s: String) -> Self {
        match Self::all().iter().find(|known| known.as_str() == s) {
            Some(known) => known.clone(),
            None => Self::Unrecognized(s),
        }
    }
}

impl From<ConnectorType> for String {
    fn from(connector: ConnectorType) -> String {
        match connector {
            ConnectorType::Unrecognized(name) => name,
            known => known.as_str().to_string(),
        }
    }
}
