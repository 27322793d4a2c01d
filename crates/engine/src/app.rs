//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    ports::{ClockPort, ConnectionRepo, DeviceRepo, DiagramDeviceRepo, DiagramRepo, PortRepo},
    sqlite::SqliteRepositories,
};
use crate::use_cases;

/// Main application state.
///
/// Holds all repositories and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all repository ports.
pub struct Repositories {
    pub device: Arc<dyn DeviceRepo>,
    pub port: Arc<dyn PortRepo>,
    pub diagram: Arc<dyn DiagramRepo>,
    pub diagram_device: Arc<dyn DiagramDeviceRepo>,
    pub connection: Arc<dyn ConnectionRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: use_cases::CatalogUseCases,
    pub diagrams: use_cases::DiagramUseCases,
    pub wiring: use_cases::WiringUseCases,
    pub export: Arc<use_cases::ExportCableList>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: SqliteRepositories, clock: Arc<dyn ClockPort>) -> Self {
        let repositories = Repositories {
            device: repos.device,
            port: repos.port,
            diagram: repos.diagram,
            diagram_device: repos.diagram_device,
            connection: repos.connection,
        };
        let use_cases = UseCases::new(&repositories, clock);
        Self {
            repositories,
            use_cases,
        }
    }
}

impl UseCases {
    fn new(repos: &Repositories, clock: Arc<dyn ClockPort>) -> Self {
        let catalog = use_cases::CatalogUseCases::new(
            use_cases::DeviceCrud::new(repos.device.clone(), clock.clone()),
            use_cases::PortCrud::new(repos.port.clone(), repos.device.clone(), clock.clone()),
        );

        let diagrams = use_cases::DiagramUseCases::new(
            use_cases::DiagramCrud::new(repos.diagram.clone(), clock.clone()),
            use_cases::PlacementCrud::new(
                repos.diagram_device.clone(),
                repos.diagram.clone(),
                repos.device.clone(),
                clock.clone(),
            ),
        );

        let wiring = use_cases::WiringUseCases::new(
            Arc::new(use_cases::CheckConnection::new(repos.port.clone())),
            Arc::new(use_cases::CreateConnection::new(
                repos.diagram.clone(),
                repos.diagram_device.clone(),
                repos.port.clone(),
                repos.connection.clone(),
                clock,
            )),
            Arc::new(use_cases::DeleteConnection::new(repos.connection.clone())),
            Arc::new(use_cases::ConnectionQueries::new(
                repos.diagram.clone(),
                repos.connection.clone(),
            )),
        );

        let export = Arc::new(use_cases::ExportCableList::new(
            repos.diagram.clone(),
            repos.diagram_device.clone(),
            repos.device.clone(),
            repos.port.clone(),
            repos.connection.clone(),
        ));

        Self {
            catalog,
            diagrams,
            wiring,
            export,
        }
    }
}
