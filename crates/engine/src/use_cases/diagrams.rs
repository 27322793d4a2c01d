//! Diagram use cases: diagrams and the device instances placed on them.

use std::sync::Arc;

use patchbay_domain::{
    Description, Diagram, DiagramDevice, DiagramDeviceId, DiagramId, DiagramName, DeviceId,
    DomainError,
};
use patchbay_shared::{
    CreateDiagramData, CreateDiagramDeviceData, UpdateDiagramData, UpdateDiagramDeviceData,
};

use super::non_blank;
use crate::infrastructure::ports::{
    ClockPort, DeviceRepo, DiagramDeviceRepo, DiagramRepo, RepoError,
};

#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("Diagram not found: {0}")]
    DiagramNotFound(DiagramId),
    #[error("Diagram device not found: {0}")]
    PlacementNotFound(DiagramDeviceId),
    #[error("Device not found: {0}")]
    DeviceNotFound(DeviceId),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Container for diagram use cases.
pub struct DiagramUseCases {
    pub diagrams: DiagramCrud,
    pub placements: PlacementCrud,
}

impl DiagramUseCases {
    pub fn new(diagrams: DiagramCrud, placements: PlacementCrud) -> Self {
        Self {
            diagrams,
            placements,
        }
    }
}

// =============================================================================
// Diagram CRUD
// =============================================================================

pub struct DiagramCrud {
    diagrams: Arc<dyn DiagramRepo>,
    clock: Arc<dyn ClockPort>,
}

impl DiagramCrud {
    pub fn new(diagrams: Arc<dyn DiagramRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { diagrams, clock }
    }

    pub async fn list(&self) -> Result<Vec<Diagram>, DiagramError> {
        Ok(self.diagrams.list().await?)
    }

    pub async fn get(&self, id: DiagramId) -> Result<Diagram, DiagramError> {
        self.diagrams
            .get(id)
            .await?
            .ok_or(DiagramError::DiagramNotFound(id))
    }

    pub async fn create(&self, data: CreateDiagramData) -> Result<Diagram, DiagramError> {
        let mut diagram = Diagram::new(DiagramName::new(data.name)?, self.clock.now());
        if let Some(text) = non_blank(data.description) {
            diagram = diagram.with_description(Description::new(text)?);
        }
        if let Some(client) = non_blank(data.client_name) {
            diagram = diagram.with_client_name(client);
        }

        self.diagrams.save(&diagram).await?;
        tracing::info!(diagram_id = %diagram.id, name = %diagram.name, "Created diagram");
        Ok(diagram)
    }

    pub async fn update(
        &self,
        id: DiagramId,
        data: UpdateDiagramData,
    ) -> Result<Diagram, DiagramError> {
        let mut diagram = self.get(id).await?;

        if let Some(name) = data.name {
            diagram.name = DiagramName::new(name)?;
        }
        if data.description.is_some() {
            diagram.description = non_blank(data.description)
                .map(Description::new)
                .transpose()?;
        }
        if data.client_name.is_some() {
            diagram.client_name = non_blank(data.client_name);
        }
        diagram.touch(self.clock.now());

        self.diagrams.save(&diagram).await?;
        tracing::debug!(diagram_id = %diagram.id, "Updated diagram");
        Ok(diagram)
    }

    pub async fn delete(&self, id: DiagramId) -> Result<(), DiagramError> {
        if !self.diagrams.delete(id).await? {
            return Err(DiagramError::DiagramNotFound(id));
        }
        tracing::info!(diagram_id = %id, "Deleted diagram");
        Ok(())
    }
}

// =============================================================================
// Placed devices
// =============================================================================

pub struct PlacementCrud {
    placements: Arc<dyn DiagramDeviceRepo>,
    diagrams: Arc<dyn DiagramRepo>,
    devices: Arc<dyn DeviceRepo>,
    clock: Arc<dyn ClockPort>,
}

impl PlacementCrud {
    pub fn new(
        placements: Arc<dyn DiagramDeviceRepo>,
        diagrams: Arc<dyn DiagramRepo>,
        devices: Arc<dyn DeviceRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            placements,
            diagrams,
            devices,
            clock,
        }
    }

    pub async fn list(
        &self,
        diagram_id: Option<DiagramId>,
    ) -> Result<Vec<DiagramDevice>, DiagramError> {
        Ok(self.placements.list(diagram_id).await?)
    }

    pub async fn get(&self, id: DiagramDeviceId) -> Result<DiagramDevice, DiagramError> {
        self.placements
            .get(id)
            .await?
            .ok_or(DiagramError::PlacementNotFound(id))
    }

    /// Place a catalog device on a diagram.
    pub async fn place(
        &self,
        data: CreateDiagramDeviceData,
    ) -> Result<DiagramDevice, DiagramError> {
        let diagram_id = DiagramId::from_uuid(data.diagram_id);
        let device_id = DeviceId::from_uuid(data.device_id);
        ensure_finite(&[data.position_x, data.position_y])?;

        if self.diagrams.get(diagram_id).await?.is_none() {
            return Err(DiagramError::DiagramNotFound(diagram_id));
        }
        if self.devices.get(device_id).await?.is_none() {
            return Err(DiagramError::DeviceNotFound(device_id));
        }

        let mut placed = DiagramDevice::new(
            diagram_id,
            device_id,
            data.position_x,
            data.position_y,
            self.clock.now(),
        );
        if let Some(rotation) = data.rotation {
            ensure_finite(&[rotation])?;
            placed = placed.with_rotation(rotation);
        }

        self.placements.save(&placed).await?;
        tracing::info!(
            placement_id = %placed.id,
            diagram_id = %diagram_id,
            device_id = %device_id,
            "Placed device on diagram"
        );
        Ok(placed)
    }

    /// Move and/or rotate a placed device.
    pub async fn update(
        &self,
        id: DiagramDeviceId,
        data: UpdateDiagramDeviceData,
    ) -> Result<DiagramDevice, DiagramError> {
        let mut placed = self.get(id).await?;
        let now = self.clock.now();

        let x = data.position_x.unwrap_or(placed.position_x);
        let y = data.position_y.unwrap_or(placed.position_y);
        ensure_finite(&[x, y])?;
        placed.move_to(x, y, now);

        if let Some(rotation) = data.rotation {
            ensure_finite(&[rotation])?;
            placed.rotation = rotation;
        }

        self.placements.save(&placed).await?;
        Ok(placed)
    }

    pub async fn remove(&self, id: DiagramDeviceId) -> Result<(), DiagramError> {
        if !self.placements.delete(id).await? {
            return Err(DiagramError::PlacementNotFound(id));
        }
        tracing::info!(placement_id = %id, "Removed device from diagram");
        Ok(())
    }
}

fn ensure_finite(values: &[f64]) -> Result<(), DomainError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(DomainError::validation("Position and rotation must be finite numbers"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockDeviceRepo, MockDiagramDeviceRepo, MockDiagramRepo};
    use chrono::{TimeZone, Utc};
    use patchbay_domain::{Device, DeviceCategory, DeviceLabel};

    fn clock() -> Arc<dyn ClockPort> {
        Arc::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap()))
    }

    fn diagram() -> Diagram {
        Diagram::new(DiagramName::new("Smith Residence").unwrap(), Utc::now())
    }

    fn device() -> Device {
        Device::new(
            DeviceLabel::new("Sony").unwrap(),
            DeviceLabel::new("Bravia 65").unwrap(),
            DeviceCategory::Display,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn when_creating_diagram_then_blank_optionals_are_dropped() {
        let mut repo = MockDiagramRepo::new();
        repo.expect_save().times(1).returning(|_| Ok(()));

        let crud = DiagramCrud::new(Arc::new(repo), clock());
        let created = crud
            .create(CreateDiagramData {
                name: "Living Room".into(),
                description: Some("".into()),
                client_name: Some(" Smith ".into()),
            })
            .await
            .unwrap();

        assert_eq!(created.name.as_str(), "Living Room");
        assert!(created.description.is_none());
        assert_eq!(created.client_name.as_deref(), Some("Smith"));
    }

    #[tokio::test]
    async fn when_diagram_name_is_blank_then_validation_fails() {
        let mut repo = MockDiagramRepo::new();
        repo.expect_save().never();

        let crud = DiagramCrud::new(Arc::new(repo), clock());
        let err = crud
            .create(CreateDiagramData {
                name: "   ".into(),
                description: None,
                client_name: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DiagramError::Domain(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn when_updating_diagram_then_updated_at_moves() {
        let existing = diagram();
        let mut repo = MockDiagramRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save().returning(|_| Ok(()));

        let crud = DiagramCrud::new(Arc::new(repo), clock());
        let updated = crud
            .update(
                DiagramId::new(),
                UpdateDiagramData {
                    client_name: Some("Jones".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name.as_str(), "Smith Residence");
        assert_eq!(updated.client_name.as_deref(), Some("Jones"));
        assert_eq!(updated.updated_at.timestamp(), 1_700_000_000);
    }

    #[tokio::test]
    async fn when_placing_on_missing_diagram_then_not_found() {
        let mut diagrams = MockDiagramRepo::new();
        diagrams.expect_get().returning(|_| Ok(None));
        let mut placements = MockDiagramDeviceRepo::new();
        placements.expect_save().never();

        let crud = PlacementCrud::new(
            Arc::new(placements),
            Arc::new(diagrams),
            Arc::new(MockDeviceRepo::new()),
            clock(),
        );
        let err = crud
            .place(CreateDiagramDeviceData {
                diagram_id: uuid::Uuid::new_v4(),
                device_id: uuid::Uuid::new_v4(),
                position_x: 10.0,
                position_y: 20.0,
                rotation: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DiagramError::DiagramNotFound(_)));
    }

    #[tokio::test]
    async fn when_placing_device_then_rotation_defaults_to_zero() {
        let target = diagram();
        let catalog = device();
        let (diagram_id, device_id) = (target.id, catalog.id);

        let mut diagrams = MockDiagramRepo::new();
        diagrams
            .expect_get()
            .returning(move |_| Ok(Some(target.clone())));
        let mut devices = MockDeviceRepo::new();
        devices
            .expect_get()
            .returning(move |_| Ok(Some(catalog.clone())));
        let mut placements = MockDiagramDeviceRepo::new();
        placements
            .expect_save()
            .withf(move |p| p.diagram_id == diagram_id && p.device_id == device_id)
            .times(1)
            .returning(|_| Ok(()));

        let crud = PlacementCrud::new(
            Arc::new(placements),
            Arc::new(diagrams),
            Arc::new(devices),
            clock(),
        );
        let placed = crud
            .place(CreateDiagramDeviceData {
                diagram_id: diagram_id.to_uuid(),
                device_id: device_id.to_uuid(),
                position_x: 120.5,
                position_y: 40.0,
                rotation: None,
            })
            .await
            .unwrap();

        assert_eq!(placed.rotation, 0.0);
        assert_eq!(placed.position_x, 120.5);
    }

    #[tokio::test]
    async fn when_moving_placement_then_unset_axes_are_kept() {
        let placed = DiagramDevice::new(DiagramId::new(), DeviceId::new(), 5.0, 7.0, Utc::now());
        let id = placed.id;
        let mut placements = MockDiagramDeviceRepo::new();
        placements
            .expect_get()
            .returning(move |_| Ok(Some(placed.clone())));
        placements.expect_save().returning(|_| Ok(()));

        let crud = PlacementCrud::new(
            Arc::new(placements),
            Arc::new(MockDiagramRepo::new()),
            Arc::new(MockDeviceRepo::new()),
            clock(),
        );
        let moved = crud
            .update(
                id,
                UpdateDiagramDeviceData {
                    position_x: Some(50.0),
                    position_y: None,
                    rotation: Some(90.0),
                },
            )
            .await
            .unwrap();

        assert_eq!((moved.position_x, moved.position_y), (50.0, 7.0));
        assert_eq!(moved.rotation, 90.0);
    }

    #[tokio::test]
    async fn when_removing_unknown_placement_then_not_found() {
        let mut placements = MockDiagramDeviceRepo::new();
        placements.expect_delete().returning(|_| Ok(false));

        let crud = PlacementCrud::new(
            Arc::new(placements),
            Arc::new(MockDiagramRepo::new()),
            Arc::new(MockDeviceRepo::new()),
            clock(),
        );
        assert!(matches!(
            crud.remove(DiagramDeviceId::new()).await,
            Err(DiagramError::PlacementNotFound(_))
        ));
    }
}
