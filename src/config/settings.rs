//! Storefront settings loading from storefront.toml
//!
//! Every field has a default, so a missing or empty file still yields a
//! usable configuration.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default catalog location, next to the binary's working directory.
pub const DEFAULT_CATALOG_SOURCE: &str = "./products.json";

/// Default settings file name.
pub const DEFAULT_SETTINGS_FILE: &str = "storefront.toml";

/// Configuration structure representing the entire storefront.toml file
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Where to load products from
    pub catalog: CatalogSettings,
    /// How prices are shown
    pub display: DisplaySettings,
    /// Log filter used when `RUST_LOG` is unset
    pub logging: LoggingSettings,
}

/// `[catalog]` table
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogSettings {
    /// File path or `http(s)` URL of the catalog document
    pub source: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_CATALOG_SOURCE.to_string(),
        }
    }
}

/// `[display]` table
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Prefix for every rendered price
    pub currency_symbol: String,
    /// Banner title above the product grid
    pub banner: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            banner: "furniture collection".to_string(),
        }
    }
}

/// `[logging]` table
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `"info"` or `"storefront=debug"`
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML syntax is invalid or a field has
/// the wrong type.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse storefront.toml: {e}"),
    })
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    tracing::debug!("Attempting to load settings from: {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read settings file {}: {e}", path.display()),
    })?;
    parse_settings(&contents)
}

/// Loads settings from the default location if it exists, otherwise defaults.
///
/// # Errors
/// Returns an error only if the file exists but cannot be read or parsed.
pub fn load_default_settings() -> Result<Settings> {
    let path = Path::new(DEFAULT_SETTINGS_FILE);
    if path.exists() {
        load_settings(path)
    } else {
        tracing::debug!("No {} found, using defaults", DEFAULT_SETTINGS_FILE);
        Ok(Settings::default())
    }
}
