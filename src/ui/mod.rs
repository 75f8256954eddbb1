//! Presentation layer: view models, the presenter and the terminal surface.
//!
//! # Architecture
//!
//! ```text
//! (CharacterProfile, EquipmentRecord) → render → CharacterView → DisplaySurface
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable results
//! - [`presenter`]: Pure mapping from lookup results to view models
//! - [`renderer`]: Terminal implementation of the display surface
//! - [`style`]: ANSI escape sequences

pub mod presenter;
pub mod renderer;
pub mod style;
pub mod viewmodel;

pub use presenter::render;
pub use renderer::TerminalSurface;
pub use viewmodel::CharacterView;
