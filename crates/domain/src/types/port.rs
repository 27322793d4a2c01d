//! Per-port attributes: gender, signal direction and signal category.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical gender of a port's connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    /// Catalog default for new ports
    #[default]
    Female,
    /// Gender is meaningless for this connector (bare wire, fiber, ...)
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Gender {
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::NotApplicable]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "N/A" => Ok(Gender::NotApplicable),
            other => Err(DomainError::parse(format!("Unknown gender: {other}"))),
        }
    }
}

/// Which way a signal flows through a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Input,
    Output,
    /// Declared by the catalog, but never accepted by the wiring checker.
    Bidirectional,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        &[Direction::Input, Direction::Output, Direction::Bidirectional]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Input => "Input",
            Direction::Output => "Output",
            Direction::Bidirectional => "Bidirectional",
        }
    }

    /// True for exactly Output->Input and Input->Output.
    pub fn pairs_with(self, target: Direction) -> bool {
        matches!(
            (self, target),
            (Direction::Output, Direction::Input) | (Direction::Input, Direction::Output)
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Input" => Ok(Direction::Input),
            "Output" => Ok(Direction::Output),
            "Bidirectional" => Ok(Direction::Bidirectional),
            other => Err(DomainError::parse(format!("Unknown direction: {other}"))),
        }
    }
}

/// Signal category carried by a port. Used for grouping in the UI only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SignalType {
    #[default]
    Video,
    Audio,
    Data,
    Control,
    Power,
    Mixed,
}

impl SignalType {
    pub fn all() -> &'static [SignalType] {
        &[
            SignalType::Video,
            SignalType::Audio,
            SignalType::Data,
            SignalType::Control,
            SignalType::Power,
            SignalType::Mixed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Video => "Video",
            SignalType::Audio => "Audio",
            SignalType::Data => "Data",
            SignalType::Control => "Control",
            SignalType::Power => "Power",
            SignalType::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignalType::all()
            .iter()
            .copied()
            .find(|signal| signal.as_str() == s.trim())
            .ok_or_else(|| DomainError::parse(format!("Unknown signal type: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_not_applicable_uses_slash_name() {
        assert_eq!(Gender::NotApplicable.to_string(), "N/A");
        assert_eq!(serde_json::to_string(&Gender::NotApplicable).unwrap(), "\"N/A\"");
        assert_eq!("N/A".parse::<Gender>().unwrap(), Gender::NotApplicable);
    }

    #[test]
    fn unknown_gender_is_a_parse_error() {
        let err = "Hermaphrodite".parse::<Gender>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn only_opposite_directions_pair() {
        for source in Direction::all() {
            for target in Direction::all() {
                let expected = matches!(
                    (source, target),
                    (Direction::Output, Direction::Input) | (Direction::Input, Direction::Output)
                );
                assert_eq!(source.pairs_with(*target), expected, "{source} -> {target}");
            }
        }
    }

    #[test]
    fn signal_type_parses_display_name() {
        for signal in SignalType::all() {
            assert_eq!(signal.as_str().parse::<SignalType>().unwrap(), *signal);
        }
        assert!("Laser".parse::<SignalType>().is_err());
    }

    #[test]
    fn catalog_defaults_match_new_port_form() {
        assert_eq!(Gender::default(), Gender::Female);
        assert_eq!(Direction::default(), Direction::Input);
        assert_eq!(SignalType::default(), SignalType::Video);
    }
}
