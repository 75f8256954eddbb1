//! Error types for character lookups.
//!
//! This module defines the centralized error type [`LookupError`] and a type alias
//! [`Result`] used throughout the crate. Every variant renders as a single
//! human-readable message, which is what the display surface shows when a search
//! fails.

use std::fmt;
use thiserror::Error;

/// Which of the two per-character resources a fetch was retrieving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Basic character attributes (`/character/basic`).
    Profile,
    /// Equipped item list (`/character/item-equipment`).
    Equipment,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile => f.write_str("profile"),
            Self::Equipment => f.write_str("equipment"),
        }
    }
}

/// The main error type for lookup operations.
///
/// All lookup errors are terminal for the search that produced them. None of
/// them are fatal to the process; the front-end stays ready for the next
/// nickname.
///
/// # Examples
///
/// ```
/// use maplestat::LookupError;
///
/// let err = LookupError::Upstream { status: 503, status_text: "Service Unavailable".to_string() };
/// assert_eq!(err.to_string(), "upstream request failed: 503 Service Unavailable");
/// ```
#[derive(Debug, Error)]
pub enum LookupError {
    /// The nickname was empty or whitespace only. No request was made.
    #[error("nickname required")]
    EmptyInput,

    /// The identity lookup reported that no character has this nickname.
    #[error("character not found")]
    NotFound,

    /// The API answered with a non-success status other than a missing character.
    #[error("upstream request failed: {status} {status_text}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
    },

    /// The request never completed or the response body could not be decoded.
    #[error("network error: {0}")]
    Network(String),

    /// One of the two parallel fetches failed after the identity was resolved.
    ///
    /// Displays exactly like the underlying failure.
    #[error("{cause}")]
    PartialFailure {
        /// The fetch that failed.
        resource: Resource,
        /// What went wrong with it.
        #[source]
        cause: Box<LookupError>,
    },

    /// Configuration is invalid or missing.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LookupError {
    /// Wraps a fetch failure with the resource it belongs to.
    #[must_use]
    pub fn partial(resource: Resource, cause: Self) -> Self {
        Self::PartialFailure {
            resource,
            cause: Box::new(cause),
        }
    }

    /// Returns the innermost error, looking through [`LookupError::PartialFailure`].
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::PartialFailure { cause, .. } => cause.root(),
            other => other,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// A specialized `Result` type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
