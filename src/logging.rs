//! Tracing setup for the storefront binary.
//!
//! The subscriber is installed before configuration is read, with `RUST_LOG`
//! or `info` as its filter. Once storefront.toml is loaded, the configured
//! level replaces that filter unless `RUST_LOG` is set.

use crate::errors::{Error, Result};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Level used until configuration has been loaded.
pub const BOOTSTRAP_LEVEL: &str = "info";

/// Handle for swapping the active filter after startup.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Picks the filter directive: `RUST_LOG` wins over the configured level.
#[must_use]
pub fn filter_directive(rust_log: Option<String>, configured: &str) -> String {
    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

fn rust_log() -> Option<String> {
    std::env::var(EnvFilter::DEFAULT_ENV).ok()
}

/// Installs the global subscriber, logging to stderr.
pub fn init_tracing() -> FilterHandle {
    let directive = filter_directive(rust_log(), BOOTSTRAP_LEVEL);
    let (filter, handle) = reload::Layer::new(EnvFilter::new(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Switches to the configured level unless `RUST_LOG` overrides it.
///
/// # Errors
/// Returns [`Error::Config`] if the directive is invalid or the subscriber
/// has gone away.
pub fn apply_configured_level(handle: &FilterHandle, configured: &str) -> Result<()> {
    apply_directive(handle, &filter_directive(rust_log(), configured))
}

fn apply_directive(handle: &FilterHandle, directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive).map_err(|e| Error::Config {
        message: format!("Invalid log level {directive:?}: {e}"),
    })?;
    handle.reload(filter).map_err(|e| Error::Config {
        message: format!("Failed to apply log level: {e}"),
    })?;
    tracing::debug!("Log filter set to {}", directive);
    Ok(())
}
