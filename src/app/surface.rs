//! Display surface capability injected into the orchestrator.
//!
//! The orchestrator never reaches for global UI handles. It drives whatever
//! surface it was constructed with through this small capability set.

use crate::ui::viewmodel::CharacterView;
use std::sync::Arc;

/// Rendering surface for search progress and results.
///
/// Methods take `&self` so one surface can be shared between overlapping
/// searches; implementations use interior mutability where they keep state.
pub trait DisplaySurface: Send + Sync {
    /// Shows the loading indicator and clears any previously shown result or error.
    fn show_loading(&self);

    /// Hides the loading indicator. Called on every exit from loading.
    fn hide_loading(&self);

    /// Shows a failure message in place of any result.
    fn show_error(&self, message: &str);

    /// Shows a result, fully replacing the previous one.
    fn show_result(&self, view: &CharacterView);
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for Arc<T> {
    fn show_loading(&self) {
        (**self).show_loading();
    }

    fn hide_loading(&self) {
        (**self).hide_loading();
    }

    fn show_error(&self, message: &str) {
        (**self).show_error(message);
    }

    fn show_result(&self, view: &CharacterView) {
        (**self).show_result(view);
    }
}
