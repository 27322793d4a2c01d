//! # Patchbay vocabulary types
//!
//! Closed enumerations shared by the catalog, the wiring engine and the wire
//! protocol. Every variant serializes as its display string so stored rows,
//! JSON bodies and the CSV export all agree on spelling.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Stable names** - The strings here are persisted; renaming one is a migration
//! 3. **Serializable** - All types derive Serialize/Deserialize

mod category;
pub use category::DeviceCategory;

mod connector;
pub use connector::ConnectorType;

mod port;
pub use port::{Direction, Gender, SignalType};
