//! Patchbay Engine library.
//!
//! Server-side code for the AV wiring-diagram backend.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration across repositories
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
