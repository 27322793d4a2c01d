//! Value objects - validated, immutable building blocks for entities.

mod names;

pub use names::{Description, DeviceLabel, DiagramName};
