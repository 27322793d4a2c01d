//! Cable deriver and the notes convention that persists its result

use std::fmt;

use crate::entities::DeviceIo;
use crate::types::{ConnectorType, Gender};

/// Prefix used to store a derived cable type in a connection's notes
pub const CABLE_NOTE_PREFIX: &str = "Cable needed:";

/// Cable type shown when a connection's notes carry none
pub const STANDARD_CABLE: &str = "Standard Cable";

/// Gender pairing of a cable, source end first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CableConfig {
    MaleMale,
    FemaleFemale,
    MaleFemale,
    FemaleMale,
    /// Gender does not apply to at least one end
    Standard,
}

impl CableConfig {
    /// Each cable end is the opposite gender of the port it plugs into.
    pub fn for_ports(source: Gender, target: Gender) -> Self {
        match (source, target) {
            (Gender::Female, Gender::Female) => CableConfig::MaleMale,
            (Gender::Male, Gender::Male) => CableConfig::FemaleFemale,
            (Gender::Male, Gender::Female) => CableConfig::MaleFemale,
            (Gender::Female, Gender::Male) => CableConfig::FemaleMale,
            (Gender::NotApplicable, _) | (_, Gender::NotApplicable) => CableConfig::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CableConfig::MaleMale => "Male-Male",
            CableConfig::FemaleFemale => "Female-Female",
            CableConfig::MaleFemale => "Male-Female",
            CableConfig::FemaleMale => "Female-Male",
            CableConfig::Standard => "Standard",
        }
    }
}

impl fmt::Display for CableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The physical cable needed for a connection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CableSpec {
    pub connector: ConnectorType,
    pub config: CableConfig,
}

impl fmt::Display for CableSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} Cable", self.connector, self.config)
    }
}

/// Derive the cable for a pair of ports that already passed [`check`](super::check).
///
/// The connector is always taken from the source port.
pub fn derive_cable(source: &DeviceIo, target: &DeviceIo) -> CableSpec {
    CableSpec {
        connector: source.connector_type.clone(),
        config: CableConfig::for_ports(source.gender, target.gender),
    }
}

/// `"Cable needed: <cable>"`
pub fn cable_note(cable: &CableSpec) -> String {
    format!("{CABLE_NOTE_PREFIX} {cable}")
}

/// Recover the cable type from a connection's notes.
///
/// Notes without the [`CABLE_NOTE_PREFIX`], or with nothing after it, yield
/// [`STANDARD_CABLE`].
pub fn cable_type_from_notes(notes: Option<&str>) -> String {
    let recovered = notes
        .filter(|n| n.contains(CABLE_NOTE_PREFIX))
        .map(|n| n.replacen(CABLE_NOTE_PREFIX, "", 1).trim().to_string())
        .filter(|n| !n.is_empty());
    recovered.unwrap_or_else(|| STANDARD_CABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_table_is_exhaustive() {
        use Gender::*;
        let cases = [
            (Female, Female, "Male-Male"),
            (Male, Male, "Female-Female"),
            (Male, Female, "Male-Female"),
            (Female, Male, "Female-Male"),
            (NotApplicable, Male, "Standard"),
            (NotApplicable, Female, "Standard"),
            (Male, NotApplicable, "Standard"),
            (Female, NotApplicable, "Standard"),
            (NotApplicable, NotApplicable, "Standard"),
        ];
        for (source, target, expected) in cases {
            assert_eq!(CableConfig::for_ports(source, target).as_str(), expected);
        }
    }

    #[test]
    fn note_round_trips_through_export_parse() {
        let cable = CableSpec {
            connector: ConnectorType::Hdmi,
            config: CableConfig::MaleMale,
        };
        let note = cable_note(&cable);
        assert_eq!(note, "Cable needed: HDMI Male-Male Cable");
        assert_eq!(cable_type_from_notes(Some(&note)), "HDMI Male-Male Cable");
    }

    #[test]
    fn missing_notes_fall_back_to_standard_cable() {
        assert_eq!(cable_type_from_notes(None), "Standard Cable");
        assert_eq!(cable_type_from_notes(Some("Cable needed:  ")), "Standard Cable");
    }

    #[test]
    fn notes_without_prefix_mean_standard_cable() {
        assert_eq!(cable_type_from_notes(Some("10m run behind rack")), "Standard Cable");
    }
}
