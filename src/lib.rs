//! maplestat: MapleStory character lookup against the Nexon Open API.
//!
//! Given a nickname, maplestat:
//! - Resolves the character's opaque identifier (`ocid`)
//! - Fetches the character's basic profile and equipped items for yesterday's
//!   snapshot, in parallel
//! - Renders the merged result onto an injected display surface

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Front-end (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Search orchestration                             │  ← Fan-out/fan-in
//! │  - Display surface capability                       │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐          ┌───────────────────────┐
//! │ API Layer (api/)      │          │ UI Layer (ui/)        │
//! │ - CharacterSource     │          │ - Presenter           │
//! │ - Nexon HTTP client   │          │ - View models         │
//! │ - Wire formats        │          │ - Terminal surface    │
//! └───────────────────────┘          └───────────────────────┘
//!         │                                      │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Query, identity, profile, equipment types        │
//! │  - Date resolution                                  │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Search orchestrator, state machine and display surface trait
//! - [`api`]: Character data source trait and the Nexon HTTP client
//! - [`domain`]: Core domain types and errors
//! - [`ui`]: Presenter, view models and terminal rendering
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! The only required setting is the API key. It is supplied at startup, never
//! compiled in:
//!
//! ```toml
//! # maplestat.toml
//! api_key = "live_..."
//! base_url = "https://open.api.nexon.com/maplestory/v1"  # optional
//! trace_level = "info"                                     # optional
//! ```
//!
//! or through `MAPLESTAT_API_KEY`, `MAPLESTAT_BASE_URL` and
//! `MAPLESTAT_TRACE_LEVEL`. `MAPLESTAT_CONFIG` points at a TOML file and takes
//! precedence over the individual variables.
//!
//! # Search Flow
//!
//! 1. **Validate**: blank nickname → `nickname required`, no request
//! 2. **Loading**: surface shows the loading indicator
//! 3. **Identity**: `GET /id?character_name=...` → `ocid` (404 → not found)
//! 4. **Details**: `GET /character/basic` and `GET /character/item-equipment`
//!    run concurrently; both must succeed
//! 5. **Present**: view model to the surface, or the failure message
//! 6. **Cleanup**: loading indicator hidden on every path
//!
//! # Example
//!
//! ```no_run
//! use maplestat::{initialize, Config};
//! use maplestat::ui::TerminalSurface;
//!
//! # async fn run() -> maplestat::Result<()> {
//! let config = Config {
//!     api_key: "my-api-key".to_string(),
//!     ..Default::default()
//! };
//! let orchestrator = initialize(&config, TerminalSurface::stdout())?;
//! orchestrator.search("Alice").await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;

pub use api::{CharacterSource, NexonClient};
pub use app::{DisplaySurface, SearchOrchestrator, SearchResult, SearchState};
pub use domain::{LookupError, Result};

use api::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Environment variable naming a TOML configuration file.
pub const CONFIG_PATH_VAR: &str = "MAPLESTAT_CONFIG";

/// Runtime configuration supplied at startup.
///
/// # Example
///
/// ```toml
/// api_key = "live_..."
/// base_url = "https://open.api.nexon.com/maplestory/v1"
/// trace_level = "debug"
/// ```
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Nexon Open API key sent as the `x-nxopen-api-key` header.
    pub api_key: String,

    /// API root. Default: `https://open.api.nexon.com/maplestory/v1`
    pub base_url: String,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            trace_level: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("Config")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("trace_level", &self.trace_level)
            .finish()
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `api_key`: trimmed; empty when absent
    /// - `base_url`: trimmed; blank or absent → default
    /// - `trace_level`: blank → `None`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use maplestat::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), " secret ".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_key, "secret");
    /// assert_eq!(config.base_url, "https://open.api.nexon.com/maplestory/v1");
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            api_key: non_blank("api_key").unwrap_or_default(),
            base_url: non_blank("base_url").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            trace_level: non_blank("trace_level"),
        }
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Config`] if the text is not valid TOML for this shape.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| LookupError::Config(format!("invalid TOML: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Io`] if the file cannot be read and
    /// [`LookupError::Config`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&contents)
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Propagates file errors when `MAPLESTAT_CONFIG` is set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// If [`CONFIG_PATH_VAR`] resolves, that file is used; otherwise
    /// `MAPLESTAT_API_KEY`, `MAPLESTAT_BASE_URL` and `MAPLESTAT_TRACE_LEVEL`
    /// are read.
    ///
    /// # Errors
    ///
    /// Propagates file errors when the config path variable is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CONFIG_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            return Self::from_file(path.trim());
        }

        let map: BTreeMap<String, String> = [
            ("api_key", "MAPLESTAT_API_KEY"),
            ("base_url", "MAPLESTAT_BASE_URL"),
            ("trace_level", "MAPLESTAT_TRACE_LEVEL"),
        ]
        .into_iter()
        .filter_map(|(key, var)| lookup(var).map(|value| (key.to_string(), value)))
        .collect();

        Ok(Self::from_map(&map))
    }

    /// Checks that the configuration can be used to issue requests.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Config`] if the API key is blank or the base URL
    /// is not an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(LookupError::Config("API key is not set".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(LookupError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }
}

/// Builds an orchestrator backed by the Nexon Open API.
///
/// # Errors
///
/// Returns [`LookupError::Config`] if the configuration is unusable.
///
/// # Example
///
/// ```rust
/// use maplestat::{initialize, Config};
/// use maplestat::ui::TerminalSurface;
///
/// let config = Config { api_key: "key".to_string(), ..Default::default() };
/// let orchestrator = initialize(&config, TerminalSurface::new(Vec::new(), false)).unwrap();
/// assert_eq!(orchestrator.state(), maplestat::SearchState::Idle);
/// ```
pub fn initialize<D: DisplaySurface>(
    config: &Config,
    surface: D,
) -> Result<SearchOrchestrator<NexonClient, D>> {
    config.validate()?;
    tracing::debug!(base_url = %config.base_url, "initializing maplestat");
    Ok(SearchOrchestrator::new(NexonClient::from_config(config), surface))
}
