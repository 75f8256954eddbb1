//! HTTP client for the Nexon Open API MapleStory endpoints.
//!
//! Wraps the three endpoints a lookup needs (identity, basic profile, item
//! equipment) using [`reqwest`]. Each call is a single attempt: no retries and
//! no client-side timeout.

use crate::api::wire::{BasicResponse, ItemEquipmentResponse, OcidResponse};
use crate::api::CharacterSource;
use crate::domain::{CharacterProfile, DateStamp, EquipmentRecord, Identity, LookupError, Result};
use crate::Config;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-nxopen-api-key";

/// Default API root for MapleStory data.
pub const DEFAULT_BASE_URL: &str = "https://open.api.nexon.com/maplestory/v1";

/// HTTP client bound to one API key and base URL.
#[derive(Clone)]
pub struct NexonClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for NexonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NexonClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl NexonClient {
    /// Creates a client for `base_url` authenticating with `api_key`.
    ///
    /// A trailing slash on `base_url` is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Creates a client reusing an existing [`reqwest::Client`] connection pool.
    #[must_use]
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Creates a client from validated configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves a nickname to the character's `ocid`.
    ///
    /// Sends `GET /id?character_name=<nickname>` with the nickname
    /// percent-encoded as a URI component.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NotFound`] on 404
    /// - [`LookupError::Upstream`] on any other non-success status
    /// - [`LookupError::Network`] on transport or decode failure
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn resolve_identity(&self, nickname: &str) -> Result<Identity> {
        let url = format!(
            "{}/id?character_name={}",
            self.base_url,
            urlencoding::encode(nickname)
        );
        let response = self.get(&url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("identity lookup reported missing character");
            return Err(LookupError::NotFound);
        }

        let body: OcidResponse = Self::parse_response(response).await?;
        tracing::debug!(ocid = %body.ocid, "identity resolved");
        Ok(body.into())
    }

    /// Fetches basic character attributes for `date`.
    ///
    /// # Errors
    ///
    /// [`LookupError::Upstream`] on non-success status, [`LookupError::Network`]
    /// on transport or decode failure.
    #[tracing::instrument(level = "debug", skip(self, identity, date), fields(ocid = %identity, date = %date))]
    pub async fn fetch_profile(&self, identity: &Identity, date: DateStamp) -> Result<CharacterProfile> {
        let url = self.character_url("character/basic", identity, date);
        let response = self.get(&url).await?;
        let body: BasicResponse = Self::parse_response(response).await?;
        Ok(body.into())
    }

    /// Fetches the equipped item list for `date`.
    ///
    /// # Errors
    ///
    /// [`LookupError::Upstream`] on non-success status, [`LookupError::Network`]
    /// on transport or decode failure.
    #[tracing::instrument(level = "debug", skip(self, identity, date), fields(ocid = %identity, date = %date))]
    pub async fn fetch_equipment(&self, identity: &Identity, date: DateStamp) -> Result<EquipmentRecord> {
        let url = self.character_url("character/item-equipment", identity, date);
        let response = self.get(&url).await?;
        let body: ItemEquipmentResponse = Self::parse_response(response).await?;
        let record = EquipmentRecord::from(body);
        tracing::debug!(items = record.len(), "equipment fetched");
        Ok(record)
    }

    // ---- private helpers ----

    fn character_url(&self, path: &str, identity: &Identity, date: DateStamp) -> String {
        format!(
            "{}/{path}?ocid={}&date={date}",
            self.base_url,
            urlencoding::encode(identity.ocid())
        )
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "request failed before a response arrived");
                LookupError::from(e)
            })?;
        Ok(response)
    }

    /// Maps a non-success status to [`LookupError::Upstream`], keeping the
    /// response body in the debug log only.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::debug!(status = status.as_u16(), body = %body, "upstream returned an error status");
            return Err(LookupError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CharacterSource for NexonClient {
    async fn resolve_identity(&self, nickname: &str) -> Result<Identity> {
        Self::resolve_identity(self, nickname).await
    }

    async fn fetch_profile(&self, identity: &Identity, date: DateStamp) -> Result<CharacterProfile> {
        Self::fetch_profile(self, identity, date).await
    }

    async fn fetch_equipment(&self, identity: &Identity, date: DateStamp) -> Result<EquipmentRecord> {
        Self::fetch_equipment(self, identity, date).await
    }
}
