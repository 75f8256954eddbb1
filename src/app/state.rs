//! Search state machine and result types.
//!
//! A search moves `Idle → Loading → {Displayed, Failed}`; the next search
//! starts from whichever terminal state the previous one left behind.

use crate::domain::{CharacterProfile, EquipmentRecord, LookupError};
use crate::ui::viewmodel::CharacterView;

/// Observable state of the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// No search has run yet.
    #[default]
    Idle,

    /// A search is in flight.
    Loading {
        /// Generation of the search that entered this state.
        generation: u64,
    },

    /// The newest search succeeded and its view is on the surface.
    Displayed(CharacterView),

    /// The newest search failed with this message.
    Failed(String),
}

impl SearchState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// Outcome of one search, returned to the caller that started it.
#[derive(Debug)]
pub enum SearchResult {
    /// Identity resolution and both fetches succeeded.
    Success {
        profile: CharacterProfile,
        equipment: EquipmentRecord,
    },

    /// Some step failed; nothing partial was produced.
    Failure(LookupError),
}

impl SearchResult {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&LookupError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Human-readable failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

impl From<crate::domain::Result<(CharacterProfile, EquipmentRecord)>> for SearchResult {
    fn from(result: crate::domain::Result<(CharacterProfile, EquipmentRecord)>) -> Self {
        match result {
            Ok((profile, equipment)) => Self::Success { profile, equipment },
            Err(err) => Self::Failure(err),
        }
    }
}
