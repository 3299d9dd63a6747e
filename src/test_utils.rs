//! Shared test utilities for the storefront.
//!
//! Builders for raw catalog records and small product lists with sensible
//! defaults, plus tracing setup for tests.

use crate::core::product::{
    CatalogRecord, ProductList, RecordFields, RecordFile, RecordImage, RecordImageFields,
    RecordSys,
};
use tracing_subscriber::EnvFilter;

/// A three-product catalog document in the storefront's JSON shape.
pub const SAMPLE_CATALOG_JSON: &str = r#"{
  "items": [
    {
      "sys": { "id": "1" },
      "fields": {
        "title": "queen panel bed",
        "price": 10.99,
        "image": { "fields": { "file": { "url": "./images/product-1.jpeg" } } }
      }
    },
    {
      "sys": { "id": "2" },
      "fields": {
        "title": "king panel bed",
        "price": 12.99,
        "image": { "fields": { "file": { "url": "./images/product-2.jpeg" } } }
      }
    },
    {
      "sys": { "id": "3" },
      "fields": {
        "title": "single panel bed",
        "price": 12.99,
        "image": { "fields": { "file": { "url": "./images/product-3.jpeg" } } },
        "featured": true
      }
    }
  ]
}"#;

/// Installs a test-writer subscriber; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Builds a raw catalog record.
pub fn record(id: &str, title: &str, price: f64, image_url: &str) -> CatalogRecord {
    CatalogRecord {
        sys: RecordSys { id: id.to_string() },
        fields: RecordFields {
            title: title.to_string(),
            price,
            image: RecordImage {
                fields: RecordImageFields {
                    file: RecordFile {
                        url: image_url.to_string(),
                    },
                },
            },
        },
    }
}

/// Builds a product list from `(id, price)` pairs.
///
/// Titles default to `"Product <id>"` and images to `"<id>.jpg"`.
pub fn products_with_prices(entries: &[(&str, f64)]) -> ProductList {
    let mut list = ProductList::new();
    for &(id, price) in entries {
        list.add(record(id, &format!("Product {id}"), price, &format!("{id}.jpg")))
            .expect("test product should be valid");
    }
    list
}

/// The two-product catalog used across cart tests: `a` at 10.0, `b` at 3.333.
pub fn sample_products() -> ProductList {
    products_with_prices(&[("a", 10.0), ("b", 3.333)])
}
