#![forbid(unsafe_code)]

//! Process-wide tracing subscriber for the showcase binary.
//!
//! Logs go to stderr so stdout stays clean for surface output (including
//! `--json`).

use tracing_subscriber::EnvFilter;

use crate::config::ShowcaseConfig;
use crate::error::{Result, ShowcaseError};

/// Install the global subscriber. Fails if the filter does not parse or a
/// subscriber is already installed.
pub fn init(config: &ShowcaseConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|err| ShowcaseError::Logging {
        message: format!("invalid filter {:?}: {err}", config.log_filter),
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if config.log_json {
        builder.json().try_init()
    } else {
        builder.with_ansi(false).try_init()
    };
    installed.map_err(|err| ShowcaseError::Logging {
        message: err.to_string(),
    })
}
