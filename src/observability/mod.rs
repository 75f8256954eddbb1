//! Structured logging for the lookup pipeline.
//!
//! All modules log through `tracing` macros and spans (`search`,
//! `resolve_identity`, `fetch_profile`, `fetch_equipment`). This module only
//! installs the subscriber.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! The API key is never attached to spans or events.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup

pub mod init;

pub use init::init_tracing;
