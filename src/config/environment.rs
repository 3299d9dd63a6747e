//! Environment overrides for the storefront settings.
//!
//! Values come from the process environment, which `main` first populates
//! from an optional `.env` file.

/// Overrides `[catalog] source` when set.
pub const CATALOG_ENV_VAR: &str = "STOREFRONT_CATALOG";

/// Reads the catalog override, ignoring unset or blank values.
#[must_use]
pub fn catalog_override() -> Option<String> {
    non_blank(std::env::var(CATALOG_ENV_VAR).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
