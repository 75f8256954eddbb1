//! Terminal front-end and entry point.
//!
//! Thin integration layer between the maplestat library and a terminal. It
//! plays the role of the search page: every line read from stdin is one
//! nickname submitted to the orchestrator, and results are rendered to stdout.
//!
//! # Lifecycle
//!
//! 1. **Load**: read configuration from the environment (`MAPLESTAT_CONFIG` or
//!    `MAPLESTAT_API_KEY`), initialize tracing on stderr
//! 2. **Initialize**: validate configuration, build the orchestrator on a
//!    stdout surface
//! 3. **Loop**: one search per input line until EOF
//!
//! Lookup failures are rendered and the loop continues. Only configuration
//! errors end the process early.
//!
//! # Example
//!
//! ```text
//! $ MAPLESTAT_API_KEY=live_... maplestat
//! Alice
//! Alice  Lv.250 Hero @ Scania
//!   image  https://open.api.nexon.com/static/maplestory/character/look/...
//!   equipment
//!     - Weapon: Genesis
//! ```

#![allow(clippy::multiple_crate_versions)]

use maplestat::observability::init_tracing;
use maplestat::ui::TerminalSurface;
use maplestat::{initialize, Config};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("maplestat: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    let orchestrator = match initialize(&config, TerminalSurface::stdout()) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            tracing::error!(error = %e, "cannot start");
            eprintln!("maplestat: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                orchestrator.search(&line).await;
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "failed to read from stdin");
                return ExitCode::FAILURE;
            }
        }
    }

    tracing::debug!("stdin closed, exiting");
    ExitCode::SUCCESS
}
