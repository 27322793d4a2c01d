//! Wiring engine
//!
//! Pure, synchronous rules for deciding whether two ports can be cabled
//! together and which cable that takes:
//!
//! - [`ConnectorType::compatible_with`](crate::ConnectorType::compatible_with) is the mating table
//! - [`check`] applies the table and the direction rule
//! - [`derive_cable`] picks the cable's gender configuration
//! - [`OccupiedPorts`] tracks ports already used on a diagram
//! - [`ConnectionDraft`] is the step-by-step authoring workflow built on the above

mod cable;
mod draft;
mod error;
mod occupancy;
mod rules;

pub use cable::{
    cable_note, cable_type_from_notes, derive_cable, CableConfig, CableSpec, CABLE_NOTE_PREFIX,
    STANDARD_CABLE,
};
pub use draft::{ConnectionDraft, DraftStep};
pub use error::{DraftError, WiringError};
pub use occupancy::OccupiedPorts;
pub use rules::{check, Compatibility, CompatibilityReport, Incompatibility};
