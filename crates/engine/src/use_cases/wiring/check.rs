use std::sync::Arc;

use patchbay_domain::{check, CompatibilityReport, PortId};

use super::WiringUseCaseError;
use crate::infrastructure::ports::PortRepo;

/// Answer "can these two ports be connected?" without creating anything.
pub struct CheckConnection {
    ports: Arc<dyn PortRepo>,
}

impl CheckConnection {
    pub fn new(ports: Arc<dyn PortRepo>) -> Self {
        Self { ports }
    }

    pub async fn execute(
        &self,
        source_id: PortId,
        target_id: PortId,
    ) -> Result<CompatibilityReport, WiringUseCaseError> {
        let source = self
            .ports
            .get(source_id)
            .await?
            .ok_or(WiringUseCaseError::PortNotFound(source_id))?;
        let target = self
            .ports
            .get(target_id)
            .await?
            .ok_or(WiringUseCaseError::PortNotFound(target_id))?;

        let report = CompatibilityReport::from(check(&source, &target));
        tracing::debug!(
            source = %source.describe(),
            target = %target.describe(),
            compatible = report.compatible,
            "Checked port compatibility"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockPortRepo;
    use chrono::Utc;
    use patchbay_domain::{ConnectorType, DeviceId, DeviceIo, DeviceLabel, Direction, Gender};

    fn port(connector: ConnectorType, direction: Direction) -> DeviceIo {
        DeviceIo::new(
            DeviceId::new(),
            DeviceLabel::new("Port").unwrap(),
            connector,
            Utc::now(),
        )
        .with_direction(direction)
        .with_gender(Gender::Female)
    }

    fn repo_with(ports: Vec<DeviceIo>) -> MockPortRepo {
        let mut repo = MockPortRepo::new();
        repo.expect_get()
            .returning(move |id| Ok(ports.iter().find(|p| p.id == id).cloned()));
        repo
    }

    #[tokio::test]
    async fn when_ports_match_then_report_carries_cable_type() {
        let source = port(ConnectorType::Hdmi, Direction::Output);
        let target = port(ConnectorType::Hdmi, Direction::Input);
        let (s, t) = (source.id, target.id);

        let use_case = CheckConnection::new(Arc::new(repo_with(vec![source, target])));
        let report = use_case.execute(s, t).await.unwrap();

        assert!(report.compatible);
        assert_eq!(report.reason, "Compatible connection");
        assert_eq!(report.cable_type.as_deref(), Some("HDMI Male-Male Cable"));
    }

    #[tokio::test]
    async fn when_directions_clash_then_report_is_incompatible() {
        let source = port(ConnectorType::Xlr, Direction::Output);
        let target = port(ConnectorType::Xlr, Direction::Output);
        let (s, t) = (source.id, target.id);

        let use_case = CheckConnection::new(Arc::new(repo_with(vec![source, target])));
        let report = use_case.execute(s, t).await.unwrap();

        assert!(!report.compatible);
        assert!(report.reason.starts_with("Direction mismatch"));
        assert!(report.cable_type.is_none());
    }

    #[tokio::test]
    async fn when_port_is_missing_then_not_found() {
        let source = port(ConnectorType::Hdmi, Direction::Output);
        let s = source.id;
        let missing = PortId::new();

        let use_case = CheckConnection::new(Arc::new(repo_with(vec![source])));
        let err = use_case.execute(s, missing).await.unwrap_err();

        assert!(matches!(err, WiringUseCaseError::PortNotFound(id) if id == missing));
    }
}
