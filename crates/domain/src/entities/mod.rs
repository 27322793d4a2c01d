//! Domain entities - Catalog and diagram records with identity

mod connection;
mod device;
mod device_io;
mod diagram;
mod diagram_device;

pub use connection::{Connection, NewConnection};
pub use device::Device;
pub use device_io::DeviceIo;
pub use diagram::Diagram;
pub use diagram_device::DiagramDevice;
