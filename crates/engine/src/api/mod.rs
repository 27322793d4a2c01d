//! API layer - HTTP entry points.

mod catalog;
mod diagrams;
pub mod http;
mod wiring;


pub use http::{routes, ApiError};
