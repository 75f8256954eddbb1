//! Access to per-character game data.
//!
//! This module defines the [`CharacterSource`] trait that abstracts over where
//! character data comes from, and the [`NexonClient`] implementation backed by
//! the Nexon Open API. The orchestrator only talks to the trait, so tests can
//! script every response without a network.
//!
//! # Modules
//!
//! - `client`: reqwest-based HTTP client for the three endpoints
//! - `wire`: JSON response bodies and their conversion into domain types

pub mod client;
pub mod wire;

pub use client::{NexonClient, API_KEY_HEADER, DEFAULT_BASE_URL};

use crate::domain::{CharacterProfile, DateStamp, EquipmentRecord, Identity, Result};
use async_trait::async_trait;

/// Abstraction over the three lookups a search performs.
///
/// Each method maps to one outbound request and makes a single attempt.
/// Implementations must be shareable across concurrently running searches.
///
/// # Examples
///
/// ```no_run
/// use maplestat::api::{CharacterSource, NexonClient, DEFAULT_BASE_URL};
/// use maplestat::domain::DateStamp;
///
/// # async fn run() -> maplestat::Result<()> {
/// let client = NexonClient::new(DEFAULT_BASE_URL, "my-api-key");
/// let identity = CharacterSource::resolve_identity(&client, "Alice").await?;
/// let profile = CharacterSource::fetch_profile(&client, &identity, DateStamp::yesterday()).await?;
/// println!("{} Lv.{}", profile.name, profile.level);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Resolves a nickname to the character's opaque identifier.
    ///
    /// # Errors
    ///
    /// [`NotFound`](crate::LookupError::NotFound) if no character has this
    /// nickname, [`Upstream`](crate::LookupError::Upstream) for any other
    /// non-success status, [`Network`](crate::LookupError::Network) on
    /// transport failure.
    async fn resolve_identity(&self, nickname: &str) -> Result<Identity>;

    /// Retrieves basic character attributes for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    async fn fetch_profile(&self, identity: &Identity, date: DateStamp) -> Result<CharacterProfile>;

    /// Retrieves the equipped item list for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    async fn fetch_equipment(&self, identity: &Identity, date: DateStamp) -> Result<EquipmentRecord>;
}

#[async_trait]
impl<T: CharacterSource + ?Sized> CharacterSource for std::sync::Arc<T> {
    async fn resolve_identity(&self, nickname: &str) -> Result<Identity> {
        (**self).resolve_identity(nickname).await
    }

    async fn fetch_profile(&self, identity: &Identity, date: DateStamp) -> Result<CharacterProfile> {
        (**self).fetch_profile(identity, date).await
    }

    async fn fetch_equipment(&self, identity: &Identity, date: DateStamp) -> Result<EquipmentRecord> {
        (**self).fetch_equipment(identity, date).await
    }
}
