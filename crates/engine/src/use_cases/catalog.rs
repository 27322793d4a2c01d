//! Device catalog use cases: devices and their ports.

use std::sync::Arc;

use patchbay_domain::{
    ConnectorType, Description, Device, DeviceCategory, DeviceId, DeviceIo, DeviceLabel,
    Direction, DomainError, Gender, PortId, SignalType,
};
use patchbay_shared::{CreateDeviceData, CreateDeviceIoData, UpdateDeviceData, UpdateDeviceIoData};

use super::non_blank;
use crate::infrastructure::ports::{ClockPort, DeviceRepo, PortRepo, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Device not found: {0}")]
    DeviceNotFound(DeviceId),
    #[error("Port not found: {0}")]
    PortNotFound(PortId),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub devices: DeviceCrud,
    pub ports: PortCrud,
}

impl CatalogUseCases {
    pub fn new(devices: DeviceCrud, ports: PortCrud) -> Self {
        Self { devices, ports }
    }
}

// =============================================================================
// Device CRUD
// =============================================================================

pub struct DeviceCrud {
    devices: Arc<dyn DeviceRepo>,
    clock: Arc<dyn ClockPort>,
}

impl DeviceCrud {
    pub fn new(devices: Arc<dyn DeviceRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { devices, clock }
    }

    pub async fn list(&self) -> Result<Vec<Device>, CatalogError> {
        Ok(self.devices.list().await?)
    }

    pub async fn get(&self, id: DeviceId) -> Result<Device, CatalogError> {
        self.devices
            .get(id)
            .await?
            .ok_or(CatalogError::DeviceNotFound(id))
    }

    pub async fn create(&self, data: CreateDeviceData) -> Result<Device, CatalogError> {
        let mut device = Device::new(
            DeviceLabel::new(data.brand)?,
            DeviceLabel::new(data.model)?,
            data.category.parse::<DeviceCategory>()?,
            self.clock.now(),
        );
        if let Some(url) = non_blank(data.image_url) {
            device = device.with_image_url(url);
        }
        if let Some(text) = non_blank(data.description) {
            device = device.with_description(Description::new(text)?);
        }

        self.devices.save(&device).await?;
        tracing::info!(device_id = %device.id, name = %device.display_name(), "Created device");
        Ok(device)
    }

    pub async fn update(
        &self,
        id: DeviceId,
        data: UpdateDeviceData,
    ) -> Result<Device, CatalogError> {
        let mut device = self.get(id).await?;

        if let Some(brand) = data.brand {
            device.brand = DeviceLabel::new(brand)?;
        }
        if let Some(model) = data.model {
            device.model = DeviceLabel::new(model)?;
        }
        if let Some(category) = data.category {
            device.category = category.parse()?;
        }
        if data.image_url.is_some() {
            device.image_url = non_blank(data.image_url);
        }
        if data.description.is_some() {
            device.description = non_blank(data.description)
                .map(Description::new)
                .transpose()?;
        }
        device.touch(self.clock.now());

        self.devices.save(&device).await?;
        tracing::debug!(device_id = %device.id, "Updated device");
        Ok(device)
    }

    pub async fn delete(&self, id: DeviceId) -> Result<(), CatalogError> {
        if !self.devices.delete(id).await? {
            return Err(CatalogError::DeviceNotFound(id));
        }
        tracing::info!(device_id = %id, "Deleted device");
        Ok(())
    }
}

// =============================================================================
// Port CRUD
// =============================================================================

pub struct PortCrud {
    ports: Arc<dyn PortRepo>,
    devices: Arc<dyn DeviceRepo>,
    clock: Arc<dyn ClockPort>,
}

impl PortCrud {
    pub fn new(
        ports: Arc<dyn PortRepo>,
        devices: Arc<dyn DeviceRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            ports,
            devices,
            clock,
        }
    }

    pub async fn list(&self, device_id: Option<DeviceId>) -> Result<Vec<DeviceIo>, CatalogError> {
        Ok(self.ports.list(device_id).await?)
    }

    pub async fn get(&self, id: PortId) -> Result<DeviceIo, CatalogError> {
        self.ports
            .get(id)
            .await?
            .ok_or(CatalogError::PortNotFound(id))
    }

    pub async fn create(&self, data: CreateDeviceIoData) -> Result<DeviceIo, CatalogError> {
        let device_id = DeviceId::from_uuid(data.device_id);
        if self.devices.get(device_id).await?.is_none() {
            return Err(CatalogError::DeviceNotFound(device_id));
        }

        let port = DeviceIo::new(
            device_id,
            DeviceLabel::new(data.label)?,
            parse_connector(&data.connector_type)?,
            self.clock.now(),
        )
        .with_gender(parse_or_default::<Gender>(data.gender)?)
        .with_direction(parse_or_default::<Direction>(data.direction)?)
        .with_signal_type(parse_or_default::<SignalType>(data.signal_type)?);

        self.ports.save(&port).await?;
        tracing::info!(
            port_id = %port.id,
            device_id = %device_id,
            connector = %port.connector_type,
            direction = %port.direction,
            "Created port"
        );
        Ok(port)
    }

    pub async fn update(
        &self,
        id: PortId,
        data: UpdateDeviceIoData,
    ) -> Result<DeviceIo, CatalogError> {
        let mut port = self.get(id).await?;

        if let Some(label) = data.label {
            port.label = DeviceLabel::new(label)?;
        }
        if let Some(connector) = data.connector_type {
            port.connector_type = parse_connector(&connector)?;
        }
        if let Some(gender) = data.gender {
            port.gender = gender.parse()?;
        }
        if let Some(direction) = data.direction {
            port.direction = direction.parse()?;
        }
        if let Some(signal_type) = data.signal_type {
            port.signal_type = signal_type.parse()?;
        }
        port.touch(self.clock.now());

        self.ports.save(&port).await?;
        tracing::debug!(port_id = %port.id, "Updated port");
        Ok(port)
    }

    pub async fn delete(&self, id: PortId) -> Result<(), CatalogError> {
        if !self.ports.delete(id).await? {
            return Err(CatalogError::PortNotFound(id));
        }
        tracing::info!(port_id = %id, "Deleted port");
        Ok(())
    }
}

/// New ports must use a catalog connector type. Stored rows may still carry
/// unknown names, which the wiring checker reports.
fn parse_connector(name: &str) -> Result<ConnectorType, DomainError> {
    let connector = ConnectorType::from(name.trim().to_string());
    if connector.is_recognized() {
        Ok(connector)
    } else {
        Err(DomainError::parse(format!("Unknown connector type: {name}")))
    }
}

fn parse_or_default<T>(value: Option<String>) -> Result<T, DomainError>
where
    T: std::str::FromStr<Err = DomainError> + Default,
{
    match non_blank(value) {
        Some(v) => v.parse(),
        None => Ok(T::default()),
    }
}
