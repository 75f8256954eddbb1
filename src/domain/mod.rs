//! Domain layer for character lookups.
//!
//! This module contains the core types the lookup works with, independent of
//! the HTTP client or any rendering surface.
//!
//! # Organization
//!
//! - [`character`]: Search query, identity, profile and equipment types
//! - [`date`]: Query date resolution (yesterday's snapshot)
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use maplestat::domain::{Result, SearchQuery};
//!
//! fn validate(input: &str) -> Result<SearchQuery> {
//!     SearchQuery::parse(input)
//! }
//! # assert!(validate("Alice").is_ok());
//! ```

pub mod character;
pub mod date;
pub mod error;

pub use character::{CharacterProfile, EquipmentItem, EquipmentRecord, Identity, SearchQuery};
pub use date::DateStamp;
pub use error::{LookupError, Resource, Result};
