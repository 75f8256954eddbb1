//! View model types representing renderable lookup results.
//!
//! View models are produced by the [presenter](crate::ui::presenter) and
//! consumed by a [`DisplaySurface`](crate::app::DisplaySurface). They contain
//! no business logic, only display-ready text.
//!
//! # Example
//!
//! ```rust
//! use maplestat::ui::CharacterView;
//!
//! let view = CharacterView {
//!     image_url: "https://example.invalid/look.png".to_string(),
//!     name: "Alice".to_string(),
//!     world_name: "Scania".to_string(),
//!     level: "250".to_string(),
//!     class_name: "Hero".to_string(),
//!     equipment: vec!["Weapon: Genesis".to_string()],
//! };
//! assert_eq!(view.equipment.len(), 1);
//! ```

use serde::Serialize;

/// Complete view model for one successful search.
///
/// Every field is a full replacement for whatever a surface showed before;
/// surfaces must not merge `equipment` with an earlier list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterView {
    /// Character portrait source.
    pub image_url: String,

    pub name: String,

    pub world_name: String,

    /// Level as decimal text.
    pub level: String,

    pub class_name: String,

    /// One `"{slot}: {item}"` line per equipped item, in source order.
    pub equipment: Vec<String>,
}
