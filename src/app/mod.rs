//! Application layer coordinating searches.
//!
//! This module sits between the front-end (main.rs or any embedding UI) and the
//! api/domain/ui layers.
//!
//! # Architecture
//!
//! ```text
//! nickname → SearchOrchestrator → CharacterSource (identity, then profile ∥ equipment)
//!                   │
//!                   └──→ presenter → DisplaySurface
//! ```
//!
//! # Modules
//!
//! - [`orchestrator`]: Search sequencing, fan-out/fan-in and loading lifecycle
//! - [`state`]: Search state machine and result types
//! - [`surface`]: Display capability injected into the orchestrator

pub mod orchestrator;
pub mod state;
pub mod surface;

pub use orchestrator::SearchOrchestrator;
pub use state::{SearchResult, SearchState};
pub use surface::DisplaySurface;
