//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber writing to stderr.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// Stdout is left alone because the terminal surface renders there.
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times (only the first call takes effect).
///
/// # Example
///
/// ```rust
/// use maplestat::observability::init_tracing;
/// use maplestat::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(config)));

    let fmt_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}

fn level(config: &Config) -> String {
    config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string())
}
