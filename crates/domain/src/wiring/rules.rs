//! Compatibility checker

use serde::{Deserialize, Serialize};

use super::cable::{derive_cable, CableSpec};
use super::error::WiringError;
use crate::entities::DeviceIo;
use crate::types::{ConnectorType, Direction};

/// Outcome of a successful table lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    Compatible { cable: CableSpec },
    Incompatible(Incompatibility),
}

impl Compatibility {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Compatibility::Compatible { .. })
    }
}

/// Why an ordinary, well-formed port pair was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incompatibility {
    ConnectorMismatch {
        source: ConnectorType,
        target: ConnectorType,
    },
    DirectionMismatch {
        source: Direction,
        target: Direction,
    },
}

impl Incompatibility {
    pub fn reason(&self) -> String {
        match self {
            Incompatibility::ConnectorMismatch { source, target } => {
                format!("{source} cannot connect to {target}. Connector types must match.")
            }
            Incompatibility::DirectionMismatch { source, target } => format!(
                "Direction mismatch: cannot connect {source} to {target}. \
                 Only Output to Input or Input to Output is allowed."
            ),
        }
    }
}

/// Decide whether `source` may be cabled to `target`.
///
/// Short-circuits in order: connector lookup, connector family, direction.
/// Bidirectional ports never pass the direction rule.
///
/// # Errors
///
/// Returns [`WiringError::UnknownConnectorType`] when either port carries a
/// connector type outside the table.
pub fn check(source: &DeviceIo, target: &DeviceIo) -> Result<Compatibility, WiringError> {
    let allowed = source
        .connector_type
        .compatible_with()
        .ok_or_else(|| WiringError::UnknownConnectorType(source.connector_type.to_string()))?;

    if !target.connector_type.is_recognized() {
        return Err(WiringError::UnknownConnectorType(
            target.connector_type.to_string(),
        ));
    }

    if !allowed.contains(&target.connector_type) {
        return Ok(Compatibility::Incompatible(
            Incompatibility::ConnectorMismatch {
                source: source.connector_type.clone(),
                target: target.connector_type.clone(),
            },
        ));
    }

    if !source.direction.pairs_with(target.direction) {
        return Ok(Compatibility::Incompatible(
            Incompatibility::DirectionMismatch {
                source: source.direction,
                target: target.direction,
            },
        ));
    }

    Ok(Compatibility::Compatible {
        cable: derive_cable(source, target),
    })
}

/// Flat `{compatible, reason, cable_type}` view of a check, as shown to users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub compatible: bool,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cable_type: Option<String>,
    /// Set when the failure is a catalog data problem rather than a mismatch
    #[serde(default)]
    pub configuration_error: bool,
}

impl From<&Result<Compatibility, WiringError>> for CompatibilityReport {
    fn from(outcome: &Result<Compatibility, WiringError>) -> Self {
        match outcome {
            Ok(Compatibility::Compatible { cable }) => Self {
                compatible: true,
                reason: "Compatible connection".to_string(),
                cable_type: Some(cable.to_string()),
                configuration_error: false,
            },
            Ok(Compatibility::Incompatible(why)) => Self {
                compatible: false,
                reason: why.reason(),
                cable_type: None,
                configuration_error: false,
            },
            Err(e) => Self {
                compatible: false,
                reason: e.to_string(),
                cable_type: None,
                configuration_error: true,
            },
        }
    }
}

impl From<Result<Compatibility, WiringError>> for CompatibilityReport {
    fn from(outcome: Result<Compatibility, WiringError>) -> Self {
        Self::from(&outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;
    use crate::value_objects::DeviceLabel;
    use crate::DeviceId;
    use chrono::Utc;

    fn port(connector: ConnectorType, gender: Gender, direction: Direction) -> DeviceIo {
        DeviceIo::new(
            DeviceId::new(),
            DeviceLabel::new("Port").unwrap(),
            connector,
            Utc::now(),
        )
        .with_gender(gender)
        .with_direction(direction)
    }

    #[test]
    fn single_family_types_reject_every_other_type() {
        for source in ConnectorType::all() {
            if matches!(source, ConnectorType::Rj45 | ConnectorType::Cat6) {
                continue;
            }
            for target in ConnectorType::all().iter().filter(|t| *t != source) {
                let result = check(
                    &port(source.clone(), Gender::Male, Direction::Output),
                    &port(target.clone(), Gender::Female, Direction::Input),
                )
                .unwrap();
                assert!(!result.is_compatible(), "{source} -> {target}");
            }
        }
    }

    #[test]
    fn rj45_connects_to_cat6() {
        let result = check(
            &port(ConnectorType::Rj45, Gender::Female, Direction::Output),
            &port(ConnectorType::Cat6, Gender::Female, Direction::Input),
        )
        .unwrap();
        assert!(result.is_compatible());
    }

    #[test]
    fn hdmi_output_to_input_is_compatible() {
        let result = check(
            &port(ConnectorType::Hdmi, Gender::Female, Direction::Output),
            &port(ConnectorType::Hdmi, Gender::Female, Direction::Input),
        )
        .unwrap();
        assert_eq!(
            CompatibilityReport::from(Ok(result)),
            CompatibilityReport {
                compatible: true,
                reason: "Compatible connection".into(),
                cable_type: Some("HDMI Male-Male Cable".into()),
                configuration_error: false,
            }
        );
    }

    #[test]
    fn output_to_output_is_a_direction_mismatch() {
        let result = check(
            &port(ConnectorType::Hdmi, Gender::Female, Direction::Output),
            &port(ConnectorType::Hdmi, Gender::Female, Direction::Output),
        )
        .unwrap();
        let report = CompatibilityReport::from(Ok(result));
        assert!(!report.compatible);
        assert_eq!(
            report.reason,
            "Direction mismatch: cannot connect Output to Output. \
             Only Output to Input or Input to Output is allowed."
        );
    }

    #[test]
    fn bidirectional_ports_are_rejected() {
        for other in Direction::all() {
            let result = check(
                &port(ConnectorType::Dante, Gender::Female, Direction::Bidirectional),
                &port(ConnectorType::Dante, Gender::Female, *other),
            )
            .unwrap();
            assert!(!result.is_compatible());
        }
    }

    #[test]
    fn connector_mismatch_names_both_types() {
        let result = check(
            &port(ConnectorType::Xlr, Gender::Male, Direction::Output),
            &port(ConnectorType::RcaAudio, Gender::Female, Direction::Input),
        )
        .unwrap();
        assert_eq!(
            CompatibilityReport::from(Ok(result)).reason,
            "XLR cannot connect to RCA Audio. Connector types must match."
        );
    }

    #[test]
    fn unknown_connector_is_a_configuration_error() {
        let outcome = check(
            &port(
                ConnectorType::Unrecognized("SDI".into()),
                Gender::Female,
                Direction::Output,
            ),
            &port(ConnectorType::Bnc, Gender::Female, Direction::Input),
        );
        assert_eq!(
            outcome,
            Err(WiringError::UnknownConnectorType("SDI".into()))
        );
        let report = CompatibilityReport::from(&outcome);
        assert!(report.configuration_error);
        assert_eq!(report.reason, "Unknown connector type: SDI");
    }

    #[test]
    fn unknown_target_connector_is_also_a_configuration_error() {
        let outcome = check(
            &port(ConnectorType::Bnc, Gender::Female, Direction::Output),
            &port(
                ConnectorType::Unrecognized("SDI".into()),
                Gender::Female,
                Direction::Input,
            ),
        );
        assert!(outcome.is_err());
    }

    #[test]
    fn check_is_deterministic() {
        let a = port(ConnectorType::UsbC, Gender::Female, Direction::Input);
        let b = port(ConnectorType::UsbC, Gender::Male, Direction::Output);
        assert_eq!(check(&a, &b), check(&a, &b));
    }

    #[test]
    fn speaker_wire_uses_standard_cable() {
        let result = check(
            &port(ConnectorType::SpeakerWire, Gender::NotApplicable, Direction::Output),
            &port(ConnectorType::SpeakerWire, Gender::NotApplicable, Direction::Input),
        )
        .unwrap();
        assert_eq!(
            CompatibilityReport::from(Ok(result)).cable_type.as_deref(),
            Some("Speaker Wire Standard Cable")
        );
    }
}
