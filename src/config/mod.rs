//! Application configuration: settings file, environment and CLI overrides.
//!
//! Precedence, highest first: `--catalog` flag, `STOREFRONT_CATALOG`,
//! `[catalog] source` in storefront.toml, built-in default.

/// Environment variable overrides
pub mod environment;
/// storefront.toml parsing
pub mod settings;

use crate::{core::catalog::CatalogSource, errors::Result};
use settings::Settings;
use std::path::Path;
use tracing::info;

/// Fully resolved configuration used by the shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the catalog is loaded from
    pub catalog_source: CatalogSource,
    /// Prefix for rendered prices
    pub currency_symbol: String,
    /// Banner title
    pub banner: String,
    /// Default log filter
    pub log_level: String,
}

impl AppConfig {
    /// Resolves the final configuration from settings and overrides.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Config`] if the chosen catalog source is blank.
    pub fn resolve(
        settings: Settings,
        env_catalog: Option<String>,
        cli_catalog: Option<String>,
    ) -> Result<Self> {
        let source = cli_catalog
            .or(env_catalog)
            .unwrap_or(settings.catalog.source);

        Ok(Self {
            catalog_source: source.parse()?,
            currency_symbol: settings.display.currency_symbol,
            banner: settings.display.banner,
            log_level: settings.logging.level,
        })
    }
}

/// Loads settings (explicit path or default location) and applies overrides.
///
/// # Errors
/// Returns an error if the settings file cannot be read or parsed, or if the
/// resulting catalog source is blank.
pub fn load_app_configuration(
    settings_path: Option<&Path>,
    cli_catalog: Option<String>,
) -> Result<AppConfig> {
    let settings = match settings_path {
        Some(path) => settings::load_settings(path)?,
        None => settings::load_default_settings()?,
    };

    let config = AppConfig::resolve(settings, environment::catalog_override(), cli_catalog)?;
    info!("Catalog source: {}", config.catalog_source);
    Ok(config)
}
