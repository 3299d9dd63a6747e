//! Unified error type for the storefront.
//!
//! Catalog loading, catalog validation, cart mutations and shell parsing all
//! report failures through [`Error`]. Operations that return an error leave the
//! catalog and cart exactly as they were.

use thiserror::Error;

/// All errors the storefront can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Local I/O failure (catalog file, stdin, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog could not be fetched from its source.
    #[error("Failed to fetch catalog from {source_name}: {message}")]
    CatalogFetch {
        /// The file path or URL that was requested
        source_name: String,
        /// What went wrong (status line or transport error)
        message: String,
    },

    /// The catalog document is not valid JSON of the expected shape.
    #[error("Failed to parse catalog: {message}")]
    CatalogParse {
        /// Parser message, including line and column when available
        message: String,
    },

    /// A catalog record reuses an id that is already in the product list.
    #[error("Duplicate product id: {id}")]
    DuplicateProduct {
        /// The repeated id
        id: String,
    },

    /// A catalog record carries a negative or non-finite price.
    #[error("Invalid price {price} for product {id}")]
    InvalidPrice {
        /// Id of the offending product
        id: String,
        /// The rejected price
        price: f64,
    },

    /// A catalog record is missing required content.
    #[error("Invalid product: {message}")]
    InvalidProduct {
        /// Human-readable description
        message: String,
    },

    /// A cart position outside the catalog snapshot was addressed.
    #[error("Cart position {index} is out of range (cart has {len} positions)")]
    CartIndexOutOfRange {
        /// The requested position
        index: usize,
        /// Number of positions in the cart
        len: usize,
    },

    /// A shell line did not match any known command.
    #[error("Unknown command: {input}")]
    UnknownCommand {
        /// The line as typed
        input: String,
    },
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::CatalogParse {
            message: value.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
