//! Catalog loading - one-time fetch of the catalog document at startup.
//!
//! The document can come from a local file or from an `http(s)` URL. The
//! loaded value is handed straight back to the caller; nothing is cached.

use crate::{
    core::product::{CatalogDocument, ProductList},
    errors::{Error, Result},
};
use std::{fmt, path::PathBuf, str::FromStr};
use tracing::{debug, error, info, instrument};

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Local JSON file
    File(PathBuf),
    /// Remote JSON document
    Url(String),
}

impl FromStr for CatalogSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::Config {
                message: "Catalog source cannot be empty".to_string(),
            });
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(trimmed.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Parses a catalog document and builds the product list from it.
///
/// # Errors
/// Returns [`Error::CatalogParse`] for malformed JSON or records missing
/// required fields, and the errors of [`ProductList::add`] for rejected records.
pub fn parse_catalog(json: &str) -> Result<ProductList> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    debug!("Catalog document holds {} records", document.items.len());
    ProductList::from_document(document)
}

/// Reads the catalog from its source and builds the product list.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The HTTP request fails or the response status is not a success
/// - The document cannot be parsed or contains rejected records
#[instrument(skip_all, fields(source = %source))]
pub async fn load_catalog(source: &CatalogSource) -> Result<ProductList> {
    let body = match source {
        CatalogSource::File(path) => tokio::fs::read_to_string(path).await?,
        CatalogSource::Url(url) => fetch_url(url).await?,
    };

    parse_catalog(&body)
        .inspect(|list| info!("Loaded {} products from catalog", list.len()))
        .inspect_err(|e| error!("Catalog from {} rejected: {}", source, e))
}

async fn fetch_url(url: &str) -> Result<String> {
    let fetch_error = |message: String| Error::CatalogFetch {
        source_name: url.to_string(),
        message,
    };

    let response = reqwest::get(url)
        .await
        .map_err(|e| fetch_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        error!(status = %status, "Catalog request returned a non-success status");
        return Err(fetch_error(format!("HTTP error {status}")));
    }

    response.text().await.map_err(|e| fetch_error(e.to_string()))
}
