//! Tracing subscriber bootstrap.
//!
//! `RUST_LOG` takes precedence over the default filter passed by the caller.
//! Initialization happens at most once per process; later calls are no-ops.

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The default filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// Directive supplied by the caller.
        directive: String,
        /// Parser failure.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// Another global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs a formatted tracing subscriber for the process.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `default_filter` does not
/// parse and `RUST_LOG` is unset, or [`TelemetryError::Install`] when a
/// different global subscriber was installed first.
pub fn init_tracing(default_filter: &str) -> Result<(), TelemetryError> {
    TRACING_INIT.get_or_try_init(|| {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(default_filter).map_err(|source| {
                TelemetryError::InvalidFilter {
                    directive: default_filter.to_owned(),
                    source,
                }
            })?,
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .map_err(|err| TelemetryError::Install(err.to_string()))
    })?;
    Ok(())
}
